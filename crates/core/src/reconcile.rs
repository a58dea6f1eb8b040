// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification of external employees into a `SyncPreview`.
//!
//! Generating a preview is pure: it reads immutable snapshots and returns
//! data. Every unresolved case becomes a `SkippedItem` or `StatusChangeItem`.

use crate::department::{DepartmentIndex, DepartmentResolution, resolve_department};
use crate::employment::EmploymentFilter;
use crate::external::ExternalEmployee;
use crate::preview::{
    PreviewSummary, SkipReason, SkippedItem, StatusChangeItem, StatusChangeType, SyncItem, SyncPreview,
    UnchangedItem,
};
use crate::qualification::{CodeHints, QualificationFieldPattern, resolve_qualifications};
use staffsync_domain::{
    DepartmentMapping, Office, QualificationMapping, QualificationMaster, StaffRecord,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Everything a preview is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ReconciliationInput<'a> {
    /// External records, classified in this order.
    pub employees: &'a [ExternalEmployee],
    pub employment_filter: &'a EmploymentFilter,
    pub department_index: &'a DepartmentIndex,
    pub department_mappings: &'a [DepartmentMapping],
    pub qualification_mappings: &'a [QualificationMapping],
    pub offices: &'a [Office],
    /// Masters across all business types; filtered per resolved office.
    pub qualification_masters: &'a [QualificationMaster],
    pub code_hints: &'a CodeHints,
    pub qualification_field: &'a QualificationFieldPattern,
    pub existing_staff: &'a [StaffRecord],
}

/// Computes the reviewable diff between the directory and the registry.
///
/// Per employee, in input order:
///
/// 1. Match a registry record by external id, then by non-blank employee code
/// 2. Out-of-scope employment types become status changes or skips
/// 3. Terminated records become resignations or skips
/// 4. Unresolved departments are skipped
/// 5. Qualifications are resolved for the office's business type
/// 6. The record is proposed as an add, an update, or left unchanged
#[must_use]
pub fn generate_preview(input: &ReconciliationInput<'_>) -> SyncPreview {
    let mut preview: SyncPreview = SyncPreview::default();
    let mut claimed_staff: HashSet<&str> = HashSet::new();
    let mut proposed_identifiers: HashSet<&str> = HashSet::new();

    for employee in input.employees {
        let matched: Option<&StaffRecord> = match_staff(employee, input.existing_staff);

        if let Some(staff) = matched.filter(|staff| !claimed_staff.insert(staff.id.as_str())) {
            skip(
                &mut preview,
                employee,
                SkipReason::DuplicateMatch {
                    staff_id: staff.id.clone(),
                },
            );
            continue;
        }

        let active_match: Option<&StaffRecord> = matched.filter(|staff| !staff.is_terminated());

        if !input.employment_filter.includes(employee) {
            let label: Option<String> = employee
                .employment_type
                .as_ref()
                .map(|employment_type| employment_type.name.clone());
            if let Some(staff) = active_match {
                preview.status_changes.push(StatusChangeItem {
                    staff_id: staff.id.clone(),
                    external_id: employee.external_id.clone(),
                    change_type: StatusChangeType::EmploymentTypeChanged,
                    detail: label.as_deref().map_or_else(
                        || String::from("Employment type removed; no longer in sync scope"),
                        |label| format!("Employment type changed to '{label}'; no longer in sync scope"),
                    ),
                    termination_date: None,
                });
                debug!(external_id = %employee.external_id, staff_id = %staff.id, "Employment type left sync scope");
            } else {
                skip(
                    &mut preview,
                    employee,
                    SkipReason::EmploymentTypeOutOfScope {
                        employment_type: label,
                    },
                );
            }
            continue;
        }

        if let Some(termination_date) = employee.termination_date {
            if let Some(staff) = active_match {
                preview.status_changes.push(StatusChangeItem {
                    staff_id: staff.id.clone(),
                    external_id: employee.external_id.clone(),
                    change_type: StatusChangeType::Resigned,
                    detail: format!("Resigned effective {termination_date}"),
                    termination_date: Some(termination_date),
                });
                debug!(external_id = %employee.external_id, staff_id = %staff.id, "Resignation detected");
            } else {
                skip(&mut preview, employee, SkipReason::AlreadyResigned);
            }
            continue;
        }

        let (office_id, office_name): (String, String) = match resolve_department(
            employee.department.as_ref(),
            input.offices,
            input.department_index,
            input.department_mappings,
        ) {
            DepartmentResolution::Resolved {
                office_id,
                office_name,
                ..
            } => (office_id, office_name),
            DepartmentResolution::Unresolved(reason) => {
                skip(&mut preview, employee, reason);
                continue;
            }
        };

        let masters: Vec<QualificationMaster> = masters_for_office(input, &office_id);
        let qualification_ids: Vec<String> = resolve_qualifications(
            employee,
            &masters,
            input.qualification_mappings,
            input.code_hints,
            input.qualification_field,
        );

        let item: SyncItem = SyncItem {
            external_id: employee.external_id.clone(),
            employee_code: employee.code().map(ToString::to_string),
            name: employee.display_name(),
            office_id,
            office_name,
            qualification_ids,
            hire_date: employee.hire_date,
            termination_date: employee.termination_date,
            matched_staff_id: matched.map(|staff| staff.id.clone()),
        };

        match matched {
            Some(staff) if reflects(staff, &item) => {
                preview.unchanged.push(UnchangedItem {
                    staff_id: staff.id.clone(),
                    external_id: item.external_id,
                });
            }
            Some(_) => preview.to_update.push(item),
            None => {
                let repeated: Option<&str> = [Some(employee.external_id.as_str()), employee.code()]
                    .into_iter()
                    .flatten()
                    .find(|identifier| proposed_identifiers.contains(identifier));
                if let Some(identifier) = repeated {
                    skip(
                        &mut preview,
                        employee,
                        SkipReason::DuplicateExternalRecord {
                            identifier: identifier.to_string(),
                        },
                    );
                    continue;
                }
                proposed_identifiers.insert(employee.external_id.as_str());
                if let Some(code) = employee.code() {
                    proposed_identifiers.insert(code);
                }
                preview.to_add.push(item);
            }
        }
    }

    let summary: PreviewSummary = preview.summary();
    info!(
        to_add = summary.to_add,
        to_update = summary.to_update,
        status_changes = summary.status_changes,
        skipped = summary.skipped,
        unchanged = summary.unchanged,
        "Generated sync preview"
    );

    preview
}

/// Finds the registry record for `employee`.
///
/// External id takes precedence over employee code.
fn match_staff<'a>(
    employee: &ExternalEmployee,
    existing_staff: &'a [StaffRecord],
) -> Option<&'a StaffRecord> {
    existing_staff
        .iter()
        .find(|staff| staff.external_employee_id.as_deref() == Some(employee.external_id.as_str()))
        .or_else(|| {
            employee.code().and_then(|code| {
                existing_staff
                    .iter()
                    .find(|staff| staff.external_employee_code.as_deref().map(str::trim) == Some(code))
            })
        })
}

fn masters_for_office(input: &ReconciliationInput<'_>, office_id: &str) -> Vec<QualificationMaster> {
    let Some(office) = input.offices.iter().find(|office| office.id == office_id) else {
        return Vec::new();
    };
    input
        .qualification_masters
        .iter()
        .filter(|master| master.business_type == office.business_type)
        .cloned()
        .collect()
}

/// Returns whether `staff` already holds every value `item` would write.
fn reflects(staff: &StaffRecord, item: &SyncItem) -> bool {
    staff.name == item.name
        && staff.office_id == item.office_id
        && staff.qualification_ids == item.qualification_ids
        && staff.hire_date == item.hire_date
        && staff.termination_date == item.termination_date
        && staff.external_employee_id.as_deref() == Some(item.external_id.as_str())
        && staff.external_employee_code == item.employee_code
}

fn skip(preview: &mut SyncPreview, employee: &ExternalEmployee, reason: SkipReason) {
    debug!(external_id = %employee.external_id, %reason, "Skipping external employee");
    preview.skipped.push(SkippedItem {
        external_id: employee.external_id.clone(),
        employee_code: employee.code().map(ToString::to_string),
        name: employee.display_name(),
        reason,
    });
}

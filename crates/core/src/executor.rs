// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application of an accepted `SyncPreview` to the staff registry.
//!
//! `apply` is a pure transformation. Its output replaces the whole staff
//! collection in one write; callers must never persist a partially applied
//! preview.

use crate::error::CoreError;
use crate::preview::{StatusChangeItem, StatusChangeType, SyncItem, SyncPreview};
use serde::{Deserialize, Serialize};
use staffsync_domain::{CompensationRevision, EffectiveMonth, StaffRecord};
use std::collections::HashSet;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Memo attached to the initial revision of a synthesized staff record.
pub const AUTO_CREATED_MEMO: &str = "Auto-created by directory sync";

/// Inputs to `apply` that do not come from the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyContext {
    synced_at: OffsetDateTime,
    default_base_salary: i64,
}

impl ApplyContext {
    /// Creates an apply context.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSettings` if `default_base_salary` is negative.
    pub fn new(synced_at: OffsetDateTime, default_base_salary: i64) -> Result<Self, CoreError> {
        if default_base_salary < 0 {
            return Err(CoreError::InvalidSettings {
                field: String::from("default_base_salary"),
                message: format!("must not be negative, got {default_base_salary}"),
            });
        }
        Ok(Self {
            synced_at,
            default_base_salary,
        })
    }

    #[must_use]
    pub const fn synced_at(&self) -> OffsetDateTime {
        self.synced_at
    }

    #[must_use]
    pub const fn default_base_salary(&self) -> i64 {
        self.default_base_salary
    }
}

/// Counts of what an apply changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplySummary {
    pub added: usize,
    pub updated: usize,
    pub resigned: usize,
    pub employment_type_changed: usize,
    /// Matched records already in step with the directory; only their sync
    /// timestamp moved.
    pub refreshed: usize,
    /// Staff ids referenced by the preview but absent from the registry.
    pub missing_targets: Vec<String>,
}

/// The registry after an apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub staff: Vec<StaffRecord>,
    pub summary: ApplySummary,
}

/// Applies `preview` to `existing_staff`, returning the complete new registry.
///
/// Existing records keep their order; additions are appended. Updates never
/// touch compensation data. Resignations set the termination date and keep
/// the record. Employment-type changes and unchanged matches only refresh
/// the sync timestamp.
///
/// # Errors
///
/// Returns an error if an initial compensation revision cannot be built.
pub fn apply(
    preview: &SyncPreview,
    existing_staff: &[StaffRecord],
    context: &ApplyContext,
) -> Result<SyncOutcome, CoreError> {
    let mut staff: Vec<StaffRecord> = existing_staff.to_vec();
    let mut summary: ApplySummary = ApplySummary::default();
    let mut taken_ids: HashSet<String> = staff.iter().map(|record| record.id.clone()).collect();

    for item in &preview.to_add {
        let record: StaffRecord = new_staff_record(item, context, &mut taken_ids)?;
        staff.push(record);
        summary.added += 1;
    }

    for item in &preview.to_update {
        let Some(staff_id) = item.matched_staff_id.as_deref() else {
            warn!(external_id = %item.external_id, "Update without a matched staff id ignored");
            continue;
        };
        match staff.iter_mut().find(|record| record.id == staff_id) {
            Some(record) => {
                update_staff_record(record, item, context);
                summary.updated += 1;
            }
            None => missing_target(&mut summary, staff_id),
        }
    }

    for change in &preview.status_changes {
        match staff.iter_mut().find(|record| record.id == change.staff_id) {
            Some(record) => {
                apply_status_change(record, change, context);
                match change.change_type {
                    StatusChangeType::Resigned => summary.resigned += 1,
                    StatusChangeType::EmploymentTypeChanged => {
                        summary.employment_type_changed += 1;
                    }
                }
            }
            None => missing_target(&mut summary, &change.staff_id),
        }
    }

    for item in &preview.unchanged {
        match staff.iter_mut().find(|record| record.id == item.staff_id) {
            Some(record) => {
                record.last_synced_at = Some(context.synced_at);
                summary.refreshed += 1;
            }
            None => missing_target(&mut summary, &item.staff_id),
        }
    }

    info!(
        added = summary.added,
        updated = summary.updated,
        resigned = summary.resigned,
        employment_type_changed = summary.employment_type_changed,
        refreshed = summary.refreshed,
        missing = summary.missing_targets.len(),
        "Applied sync preview"
    );

    Ok(SyncOutcome { staff, summary })
}

fn new_staff_record(
    item: &SyncItem,
    context: &ApplyContext,
    taken_ids: &mut HashSet<String>,
) -> Result<StaffRecord, CoreError> {
    let staff_id: String = generate_id("staff", context.synced_at, taken_ids);
    let effective_month: EffectiveMonth =
        EffectiveMonth::from_date(item.hire_date.unwrap_or_else(|| context.synced_at.date()));
    let initial_revision: CompensationRevision = CompensationRevision::new(
        &format!("rev_{}_{}", context.synced_at.unix_timestamp(), rand::random::<u64>()),
        effective_month,
        context.default_base_salary,
        Some(AUTO_CREATED_MEMO.to_string()),
        context.synced_at,
    )?;

    let mut record: StaffRecord = StaffRecord::new(
        &staff_id,
        &item.office_id,
        &item.name,
        context.default_base_salary,
    );
    record.compensation_history.push(initial_revision);
    record.qualification_ids.clone_from(&item.qualification_ids);
    record.external_employee_id = Some(item.external_id.clone());
    record.external_employee_code.clone_from(&item.employee_code);
    record.hire_date = item.hire_date;
    record.termination_date = item.termination_date;
    record.last_synced_at = Some(context.synced_at);
    Ok(record)
}

fn update_staff_record(record: &mut StaffRecord, item: &SyncItem, context: &ApplyContext) {
    record.name.clone_from(&item.name);
    record.office_id.clone_from(&item.office_id);
    record.qualification_ids.clone_from(&item.qualification_ids);
    record.hire_date = item.hire_date;
    record.termination_date = item.termination_date;
    record.external_employee_id = Some(item.external_id.clone());
    record.external_employee_code.clone_from(&item.employee_code);
    record.last_synced_at = Some(context.synced_at);
}

fn apply_status_change(record: &mut StaffRecord, change: &StatusChangeItem, context: &ApplyContext) {
    if change.change_type == StatusChangeType::Resigned {
        record.termination_date = Some(
            change
                .termination_date
                .unwrap_or_else(|| context.synced_at.date()),
        );
    }
    record.last_synced_at = Some(context.synced_at);
}

fn missing_target(summary: &mut ApplySummary, staff_id: &str) {
    warn!(staff_id, "Preview references a staff record missing from the registry");
    summary.missing_targets.push(staff_id.to_string());
}

/// Generates an id of the form `{prefix}_{unix_timestamp}_{random}` not in `taken`.
fn generate_id(prefix: &str, at: OffsetDateTime, taken: &mut HashSet<String>) -> String {
    let timestamp: i64 = at.unix_timestamp();
    loop {
        let candidate: String = format!("{prefix}_{timestamp}_{}", rand::random::<u64>());
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}

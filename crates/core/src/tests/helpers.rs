// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApplyContext, CodeHints, CustomField, CustomFieldValue, DepartmentIndex, EmploymentFilter,
    ExternalEmployee, ExternalRef, QualificationFieldPattern, ReconciliationInput, SyncPreview,
    generate_preview,
};
use staffsync_domain::{
    BusinessType, DepartmentMapping, Office, QualificationMapping, QualificationMaster,
    StaffRecord,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const SYNCED_AT: OffsetDateTime = datetime!(2024-10-15 9:30 UTC);

pub fn create_test_context() -> ApplyContext {
    ApplyContext::new(SYNCED_AT, 200_000).unwrap()
}

pub fn create_test_office(id: &str, name: &str, external_ref: Option<&str>) -> Office {
    Office {
        id: id.to_string(),
        name: name.to_string(),
        business_type: BusinessType::new("home-care"),
        external_department_ref: external_ref.map(ToString::to_string),
    }
}

pub fn create_test_offices() -> Vec<Office> {
    vec![
        create_test_office("office-north", "North Care Center", Some("dept-north")),
        create_test_office("office-south", "South Care Center", Some("South")),
    ]
}

pub fn create_test_master(
    id: &str,
    name: &str,
    priority: i32,
    external_code: Option<&str>,
) -> QualificationMaster {
    QualificationMaster {
        id: id.to_string(),
        name: name.to_string(),
        allowance: 10_000,
        priority,
        business_type: BusinessType::new("home-care"),
        external_code: external_code.map(ToString::to_string),
    }
}

pub fn create_test_masters() -> Vec<QualificationMaster> {
    vec![
        create_test_master("q-care-worker", "Certified Care Worker", 1, Some("CCW")),
        create_test_master("q-practical", "Practical Trainee", 2, Some("PT")),
    ]
}

pub fn north_department() -> ExternalRef {
    ExternalRef::new(Some("dept-north"), "North", Some("HQ/Care/North"))
}

pub fn full_time() -> ExternalRef {
    ExternalRef::new(Some("et-full"), "Full-time", None)
}

pub fn create_test_employee(external_id: &str, code: &str) -> ExternalEmployee {
    let mut employee: ExternalEmployee = ExternalEmployee::new(external_id, "Sato", "Hanako");
    employee.employee_code = Some(code.to_string());
    employee.department = Some(north_department());
    employee.employment_type = Some(full_time());
    employee.hire_date = Some(time::macros::date!(2021 - 04 - 01));
    employee
}

pub fn qualification_field(name: &str, label: &str) -> CustomField {
    CustomField {
        name: name.to_string(),
        value: CustomFieldValue::coded(None, Some(label)),
    }
}

/// A registry record already linked to `external_id`.
pub fn create_linked_staff(id: &str, external_id: &str, code: &str) -> StaffRecord {
    let mut staff: StaffRecord = StaffRecord::new(id, "office-north", "Sato Hanako", 230_000);
    staff.external_employee_id = Some(external_id.to_string());
    staff.external_employee_code = Some(code.to_string());
    staff.hire_date = Some(time::macros::date!(2021 - 04 - 01));
    staff
}

/// Owns every collection a preview is generated from.
pub struct Fixture {
    pub employees: Vec<ExternalEmployee>,
    pub employment_filter: EmploymentFilter,
    pub department_index: DepartmentIndex,
    pub department_mappings: Vec<DepartmentMapping>,
    pub qualification_mappings: Vec<QualificationMapping>,
    pub offices: Vec<Office>,
    pub qualification_masters: Vec<QualificationMaster>,
    pub code_hints: CodeHints,
    pub qualification_field: QualificationFieldPattern,
    pub existing_staff: Vec<StaffRecord>,
}

impl Fixture {
    pub fn new(employees: Vec<ExternalEmployee>, existing_staff: Vec<StaffRecord>) -> Self {
        Self {
            employees,
            employment_filter: EmploymentFilter::default(),
            department_index: DepartmentIndex::from_departments(&[north_department()]),
            department_mappings: Vec::new(),
            qualification_mappings: Vec::new(),
            offices: create_test_offices(),
            qualification_masters: create_test_masters(),
            code_hints: CodeHints::new(),
            qualification_field: QualificationFieldPattern::default(),
            existing_staff,
        }
    }

    pub fn input(&self) -> ReconciliationInput<'_> {
        ReconciliationInput {
            employees: &self.employees,
            employment_filter: &self.employment_filter,
            department_index: &self.department_index,
            department_mappings: &self.department_mappings,
            qualification_mappings: &self.qualification_mappings,
            offices: &self.offices,
            qualification_masters: &self.qualification_masters,
            code_hints: &self.code_hints,
            qualification_field: &self.qualification_field,
            existing_staff: &self.existing_staff,
        }
    }

    pub fn preview(&self) -> SyncPreview {
        generate_preview(&self.input())
    }
}

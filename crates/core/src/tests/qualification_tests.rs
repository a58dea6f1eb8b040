// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_masters, qualification_field};
use crate::{
    CodeHints, CustomField, CustomFieldValue, ExternalEmployee, QualificationFieldPattern,
    resolve_qualifications,
};
use staffsync_domain::{QualificationMapping, QualificationMaster};

fn employee_with_fields(fields: Vec<CustomField>) -> ExternalEmployee {
    let mut employee: ExternalEmployee = ExternalEmployee::new("crew-1", "Sato", "Hanako");
    employee.custom_fields = fields;
    employee
}

fn resolve(employee: &ExternalEmployee, mappings: &[QualificationMapping]) -> Vec<String> {
    let masters: Vec<QualificationMaster> = create_test_masters();
    resolve_qualifications(
        employee,
        &masters,
        mappings,
        &CodeHints::new(),
        &QualificationFieldPattern::default(),
    )
}

#[test]
fn test_pattern_accepts_qualification_prefixes() {
    let pattern: QualificationFieldPattern = QualificationFieldPattern::default();
    assert!(pattern.matches("Qualification 1"));
    assert!(pattern.matches("qualification_secondary"));
    assert!(pattern.matches("資格1"));
}

#[test]
fn test_pattern_rejects_certificate_date_and_renewal_fields() {
    let pattern: QualificationFieldPattern = QualificationFieldPattern::default();
    assert!(!pattern.matches("Qualification certificate number"));
    assert!(!pattern.matches("qualification_acquired_date"));
    assert!(!pattern.matches("Qualification renewal"));
    assert!(!pattern.matches("資格取得日"));
    assert!(!pattern.matches("資格証番号"));
    assert!(!pattern.matches("Department"));
}

#[test]
fn test_ascii_exclusions_match_whole_words_only() {
    let pattern: QualificationFieldPattern = QualificationFieldPattern::default();
    assert!(pattern.matches("qualification_validated"));
    assert!(pattern.matches("Qualification (candidate)"));
    assert!(pattern.matches("qualification_updated"));

    assert!(!pattern.matches("Qualification expiry date"));
    assert!(!pattern.matches("Qualification expiration"));
    assert!(!pattern.matches("qualification_certificate"));
    assert!(!pattern.matches("qualificationRenewalDate"));
    assert!(!pattern.matches("資格date"));
}

#[test]
fn test_candidate_field_values_are_resolved() {
    let employee: ExternalEmployee = employee_with_fields(vec![qualification_field(
        "Qualification (candidate)",
        "Certified Care Worker",
    )]);
    assert_eq!(resolve(&employee, &[]), vec![String::from("q-care-worker")]);
}

#[test]
fn test_matches_master_by_name() {
    let employee: ExternalEmployee =
        employee_with_fields(vec![qualification_field("資格1", "Certified Care Worker")]);
    assert_eq!(resolve(&employee, &[]), vec![String::from("q-care-worker")]);
}

#[test]
fn test_matches_master_by_external_code_when_name_differs() {
    let employee: ExternalEmployee = employee_with_fields(vec![CustomField {
        name: String::from("qualification"),
        value: CustomFieldValue::coded(Some("PT"), Some("Practical (old name)")),
    }]);
    assert_eq!(resolve(&employee, &[]), vec![String::from("q-practical")]);
}

#[test]
fn test_plain_text_value_matches_by_name_or_code() {
    let employee: ExternalEmployee = employee_with_fields(vec![
        CustomField {
            name: String::from("qualification 1"),
            value: CustomFieldValue::text("CCW"),
        },
        CustomField {
            name: String::from("qualification 2"),
            value: CustomFieldValue::text("Practical Trainee"),
        },
    ]);
    assert_eq!(
        resolve(&employee, &[]),
        vec![String::from("q-care-worker"), String::from("q-practical")]
    );
}

#[test]
fn test_code_hints_supply_missing_labels() {
    let employee: ExternalEmployee = employee_with_fields(vec![CustomField {
        name: String::from("qualification"),
        value: CustomFieldValue::coded(Some("opt-7"), None),
    }]);
    let mut hints: CodeHints = CodeHints::new();
    hints.insert("opt-7", "Certified Care Worker");

    let ids: Vec<String> = resolve_qualifications(
        &employee,
        &create_test_masters(),
        &[],
        &hints,
        &QualificationFieldPattern::default(),
    );
    assert_eq!(ids, vec![String::from("q-care-worker")]);
}

#[test]
fn test_duplicates_are_collapsed_in_first_seen_order() {
    let employee: ExternalEmployee = employee_with_fields(vec![
        qualification_field("qualification 1", "Practical Trainee"),
        qualification_field("qualification 2", "Certified Care Worker"),
        qualification_field("qualification 3", "Practical Trainee"),
    ]);
    assert_eq!(
        resolve(&employee, &[]),
        vec![String::from("q-practical"), String::from("q-care-worker")]
    );
}

#[test]
fn test_unknown_values_and_non_qualification_fields_are_ignored() {
    let employee: ExternalEmployee = employee_with_fields(vec![
        qualification_field("qualification", "Pilot License"),
        qualification_field("Hobby", "Certified Care Worker"),
        qualification_field("qualification_date", "Certified Care Worker"),
    ]);
    assert!(resolve(&employee, &[]).is_empty());
}

#[test]
fn test_manual_mapping_contributes_independently() {
    let employee: ExternalEmployee = employee_with_fields(vec![
        qualification_field("qualification", "Certified Care Worker"),
        qualification_field("License", "Home Helper Level 2"),
    ]);
    let mappings: Vec<QualificationMapping> = vec![
        QualificationMapping {
            field_name: String::from("License"),
            field_value: Some(String::from("Home Helper Level 2")),
            qualification_id: String::from("q-practical"),
        },
        QualificationMapping {
            field_name: String::from("qualification"),
            field_value: Some(String::from("Certified Care Worker")),
            qualification_id: String::from("q-care-worker"),
        },
    ];

    assert_eq!(
        resolve(&employee, &mappings),
        vec![String::from("q-care-worker"), String::from("q-practical")]
    );
}

#[test]
fn test_manual_mapping_without_value_matches_any_non_empty_value() {
    let employee: ExternalEmployee = employee_with_fields(vec![
        qualification_field("Nurse license", "RN-12345"),
        CustomField {
            name: String::from("Empty license"),
            value: CustomFieldValue::default(),
        },
    ]);
    let mappings: Vec<QualificationMapping> = vec![
        QualificationMapping {
            field_name: String::from("Nurse license"),
            field_value: None,
            qualification_id: String::from("q-nurse"),
        },
        QualificationMapping {
            field_name: String::from("Empty license"),
            field_value: None,
            qualification_id: String::from("q-unused"),
        },
    ];

    assert_eq!(resolve(&employee, &mappings), vec![String::from("q-nurse")]);
}

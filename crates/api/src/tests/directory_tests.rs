// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{FakeTransport, create_test_client, create_test_crew};
use crate::{Directory, HrApiError, HrApiErrorKind, HrClient, HrResponse};
use serde_json::json;
use staffsync::{CodeHints, DepartmentIndex, ExternalRef};

#[test]
fn test_fetch_reads_every_list() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client
        .transport()
        .respond_page("/api/v1/crews", &[create_test_crew("crew-1", "E001")]);
    client.transport().respond_page(
        "/api/v1/departments",
        &[json!({ "id": "dept-north", "name": "North", "full_path": "HQ/Care/North" })],
    );
    client.transport().respond_page(
        "/api/v1/employment_types",
        &[json!({ "id": "et-1", "name": "Full-time" })],
    );
    client.transport().respond_page(
        "/api/v1/crew_custom_field_templates",
        &[json!({
            "id": "tpl-1",
            "name": "Qualification 1",
            "elements": [{ "physical_name": "CCW", "name": "Certified Care Worker" }]
        })],
    );

    let directory: Directory = Directory::fetch(&client).unwrap();

    assert_eq!(directory.employees.len(), 1);
    assert_eq!(directory.departments.len(), 1);
    assert_eq!(directory.employment_types.len(), 1);
    assert_eq!(directory.templates.len(), 1);

    let index: DepartmentIndex = directory.department_index();
    let by_path: ExternalRef = ExternalRef::from_path("HQ/Care/North");
    assert_eq!(index.canonical_id(&by_path), Some("dept-north"));

    let hints: CodeHints = directory.code_hints();
    assert_eq!(hints.label_for("CCW"), Some("Certified Care Worker"));
}

#[test]
fn test_fetch_fails_when_any_list_fails() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client
        .transport()
        .respond_page("/api/v1/crews", &[create_test_crew("crew-1", "E001")]);
    client.transport().respond(
        "/api/v1/departments",
        Ok(HrResponse {
            status: 403,
            body: String::new(),
        }),
    );

    let error: HrApiError = Directory::fetch(&client).unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::Forbidden);
}

#[test]
fn test_from_documents_without_optional_lists() {
    let employees: String = json!([create_test_crew("crew-1", "E001")]).to_string();

    let directory: Directory = Directory::from_documents(&employees, None, None).unwrap();

    assert_eq!(directory.employees.len(), 1);
    assert!(directory.departments.is_empty());
    assert!(directory.department_index().is_empty());
    assert!(directory.code_hints().is_empty());
}

#[test]
fn test_from_documents_rejects_bad_json() {
    let error: HrApiError = Directory::from_documents("[{", None, None).unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::MalformedResponse);
}

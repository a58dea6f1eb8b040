// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    FakeTransport, TEST_TOKEN, create_test_client, create_test_crew, numbered_refs,
};
use crate::{Endpoint, HrApiError, HrApiErrorKind, HrClient, HrRequest, HrResponse};
use serde_json::Value;
use staffsync::{ExternalEmployee, ExternalRef};

#[test]
fn test_blank_token_is_rejected() {
    let result: Result<HrClient<FakeTransport>, HrApiError> =
        HrClient::new(FakeTransport::new(), "   ", 100);
    let error: HrApiError = result.unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::InvalidCredentials);
    assert_eq!(error.status(), None);
}

#[test]
fn test_page_size_is_clamped() {
    assert_eq!(create_test_client(0).page_size(), 1);
    assert_eq!(create_test_client(500).page_size(), 100);
    assert_eq!(create_test_client(25).page_size(), 25);
}

#[test]
fn test_requests_carry_bearer_token_and_paging() {
    let client: HrClient<FakeTransport> = create_test_client(2);
    client.fetch_all(Endpoint::Departments).unwrap();

    let requests: Vec<HrRequest> = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/v1/departments");
    assert_eq!(requests[0].authorization, format!("Bearer {TEST_TOKEN}"));
    assert_eq!(requests[0].query_value("per_page"), Some("2"));
    assert_eq!(requests[0].query_value("page"), Some("1"));
}

#[test]
fn test_page_walk_stops_on_short_page() {
    let client: HrClient<FakeTransport> = create_test_client(2);
    let refs: Vec<Value> = numbered_refs("dept", 5);
    client.transport().respond_page("/api/v1/departments", &refs[0..2]);
    client.transport().respond_page("/api/v1/departments", &refs[2..4]);
    client.transport().respond_page("/api/v1/departments", &refs[4..5]);

    let departments: Vec<ExternalRef> = client.list_departments().unwrap();

    assert_eq!(departments.len(), 5);
    assert_eq!(departments[4].id.as_deref(), Some("dept-4"));
    let pages: Vec<String> = client
        .transport()
        .requests()
        .iter()
        .map(|request| request.query_value("page").unwrap().to_string())
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[test]
fn test_full_last_page_requires_one_more_empty_page() {
    let client: HrClient<FakeTransport> = create_test_client(2);
    let refs: Vec<Value> = numbered_refs("type", 2);
    client.transport().respond_page("/api/v1/employment_types", &refs);

    let employment_types: Vec<ExternalRef> = client.list_employment_types().unwrap();

    assert_eq!(employment_types.len(), 2);
    assert_eq!(client.transport().requests().len(), 2);
}

#[test]
fn test_error_status_is_classified() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client.transport().respond(
        "/api/v1/crews",
        Ok(HrResponse {
            status: 401,
            body: String::from("{\"message\":\"invalid token\"}"),
        }),
    );

    let error: HrApiError = client.list_employees().unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::InvalidCredentials);
    assert_eq!(error.status(), Some(401));
    assert!(error.message().contains("invalid token"));
}

#[test]
fn test_failure_mid_walk_discards_earlier_pages() {
    let client: HrClient<FakeTransport> = create_test_client(1);
    client
        .transport()
        .respond_page("/api/v1/crews", &[create_test_crew("crew-1", "E001")]);
    client.transport().respond(
        "/api/v1/crews",
        Ok(HrResponse {
            status: 503,
            body: String::new(),
        }),
    );

    let error: HrApiError = client.list_employees().unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::Api);
    assert!(error.is_retryable());
}

#[test]
fn test_connectivity_failure_propagates() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client.transport().respond(
        "/api/v1/crew_custom_field_templates",
        Err(HrApiError::connectivity("connection refused")),
    );

    let error: HrApiError = client.list_custom_field_templates().unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::Connectivity);
}

#[test]
fn test_non_list_body_is_malformed() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client.transport().respond(
        "/api/v1/departments",
        Ok(HrResponse {
            status: 200,
            body: String::from("{\"departments\":[]}"),
        }),
    );

    let error: HrApiError = client.list_departments().unwrap_err();
    assert_eq!(error.kind(), HrApiErrorKind::MalformedResponse);
    assert!(error.message().contains("/api/v1/departments page 1"));
}

#[test]
fn test_list_employees_normalizes_records() {
    let client: HrClient<FakeTransport> = create_test_client(100);
    client.transport().respond_page(
        "/api/v1/crews",
        &[
            create_test_crew("crew-1", "E001"),
            create_test_crew("crew-2", "E002"),
        ],
    );

    let employees: Vec<ExternalEmployee> = client.list_employees().unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].external_id, "crew-1");
    assert_eq!(employees[0].employee_code.as_deref(), Some("E001"));
    assert_eq!(employees[0].display_name(), "Sato Hanako");
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{HrApiError, HrClient, HrRequest, HrResponse, HrTransport};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

pub const TEST_TOKEN: &str = "shr_test_token";

/// Transport that replays scripted responses per path and records requests.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: RefCell<BTreeMap<String, VecDeque<Result<HrResponse, HrApiError>>>>,
    requests: RefCell<Vec<HrRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, response: Result<HrResponse, HrApiError>) {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn respond_page(&self, path: &str, records: &[Value]) {
        self.respond(path, Ok(ok_response(&Value::Array(records.to_vec()))));
    }

    pub fn requests(&self) -> Vec<HrRequest> {
        self.requests.borrow().clone()
    }
}

impl HrTransport for FakeTransport {
    fn send(&self, request: &HrRequest) -> Result<HrResponse, HrApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(ok_response(&json!([]))))
    }
}

pub fn ok_response(body: &Value) -> HrResponse {
    HrResponse {
        status: 200,
        body: body.to_string(),
    }
}

pub fn create_test_client(page_size: u32) -> HrClient<FakeTransport> {
    HrClient::new(FakeTransport::new(), TEST_TOKEN, page_size).unwrap()
}

pub fn create_test_crew(id: &str, code: &str) -> Value {
    json!({
        "id": id,
        "emp_code": code,
        "last_name": "Sato",
        "first_name": "Hanako",
        "department": {
            "id": "dept-north",
            "name": "North",
            "full_path_name": "HQ/Care/North"
        },
        "employment_type": { "id": "et-1", "name": "Full-time" },
        "custom_fields": [
            {
                "template": { "id": "tpl-1", "name": "Qualification 1" },
                "value": "Certified Care Worker"
            }
        ],
        "entered_at": "2021-04-01",
        "resigned_at": null
    })
}

pub fn numbered_refs(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|n| json!({ "id": format!("{prefix}-{n}"), "name": format!("{prefix} {n}") }))
        .collect()
}

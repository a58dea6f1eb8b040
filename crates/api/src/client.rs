// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Paginated, authenticated reads from the HR directory.

use crate::error::HrApiError;
use crate::wire::{self, WireFieldTemplate};
use serde_json::Value;
use staffsync::{ExternalEmployee, ExternalRef, MAX_PAGE_SIZE};
use tracing::{debug, info};

/// Hard stop for a page walk whose pages never run short.
pub const MAX_PAGES: u32 = 1_000;

/// A list resource exposed by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Employees,
    Departments,
    EmploymentTypes,
    CustomFieldTemplates,
}

impl Endpoint {
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Employees => "/api/v1/crews",
            Self::Departments => "/api/v1/departments",
            Self::EmploymentTypes => "/api/v1/employment_types",
            Self::CustomFieldTemplates => "/api/v1/crew_custom_field_templates",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One GET against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Value of the `Authorization` header.
    pub authorization: String,
}

impl HrRequest {
    /// Returns the value of query parameter `name`.
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A raw directory response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrResponse {
    pub status: u16,
    pub body: String,
}

impl HrResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Carries requests to the directory.
///
/// Implementations own the base URL, TLS, timeouts and any retry policy.
/// A request that produced no response must fail with
/// `HrApiError::connectivity`.
pub trait HrTransport {
    /// Sends `request` and returns whatever status the directory answered with.
    ///
    /// # Errors
    ///
    /// Returns a connectivity error if no response was received.
    fn send(&self, request: &HrRequest) -> Result<HrResponse, HrApiError>;
}

/// Authenticated client for the directory's list endpoints.
#[derive(Debug, Clone)]
pub struct HrClient<T: HrTransport> {
    transport: T,
    access_token: String,
    page_size: u32,
}

impl<T: HrTransport> HrClient<T> {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `transport` - Carries the requests
    /// * `access_token` - Plaintext bearer token
    /// * `page_size` - Requested `per_page`, clamped to the directory maximum
    ///
    /// # Errors
    ///
    /// Returns an invalid-credentials error if `access_token` is blank.
    pub fn new(transport: T, access_token: &str, page_size: u32) -> Result<Self, HrApiError> {
        let access_token: &str = access_token.trim();
        if access_token.is_empty() {
            return Err(HrApiError::missing_credentials());
        }
        Ok(Self {
            transport,
            access_token: access_token.to_string(),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads every record of `endpoint`, page by page.
    ///
    /// Pages are requested sequentially from 1; the walk stops after the
    /// first page shorter than the page size. Any failure aborts the whole
    /// walk so callers never see a partial list.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the first failed page, or a
    /// malformed-response error if a page is not a JSON array.
    pub fn fetch_all(&self, endpoint: Endpoint) -> Result<Vec<Value>, HrApiError> {
        let mut records: Vec<Value> = Vec::new();
        let page_len: usize = usize::try_from(self.page_size).unwrap_or(usize::MAX);

        for page in 1..=MAX_PAGES {
            let request: HrRequest = self.request(endpoint, page);
            let response: HrResponse = self.transport.send(&request)?;
            if !response.is_success() {
                return Err(HrApiError::from_status(response.status, &response.body));
            }

            let batch: Vec<Value> = wire::parse_list(&response.body).map_err(|error| {
                HrApiError::malformed(&format!("{endpoint} page {page}: {}", error.message()))
            })?;
            let batch_len: usize = batch.len();
            debug!(%endpoint, page, records = batch_len, "Fetched directory page");
            records.extend(batch);

            if batch_len < page_len {
                info!(%endpoint, pages = page, records = records.len(), "Fetched directory list");
                return Ok(records);
            }
        }

        Err(HrApiError::malformed(&format!(
            "{endpoint} did not finish within {MAX_PAGES} pages"
        )))
    }

    /// Lists every employee, normalized.
    ///
    /// # Errors
    ///
    /// Returns any fetch error or a malformed-response error for a record
    /// that cannot be normalized.
    pub fn list_employees(&self) -> Result<Vec<ExternalEmployee>, HrApiError> {
        let records: Vec<Value> = self.fetch_all(Endpoint::Employees)?;
        wire::employees_from_values(records)
    }

    /// Lists every department.
    ///
    /// # Errors
    ///
    /// Returns any fetch error.
    pub fn list_departments(&self) -> Result<Vec<ExternalRef>, HrApiError> {
        let records: Vec<Value> = self.fetch_all(Endpoint::Departments)?;
        wire::refs_from_values(records)
    }

    /// Lists every employment type.
    ///
    /// # Errors
    ///
    /// Returns any fetch error.
    pub fn list_employment_types(&self) -> Result<Vec<ExternalRef>, HrApiError> {
        let records: Vec<Value> = self.fetch_all(Endpoint::EmploymentTypes)?;
        wire::refs_from_values(records)
    }

    /// Lists every custom-field template.
    ///
    /// # Errors
    ///
    /// Returns any fetch error.
    pub fn list_custom_field_templates(&self) -> Result<Vec<WireFieldTemplate>, HrApiError> {
        let records: Vec<Value> = self.fetch_all(Endpoint::CustomFieldTemplates)?;
        wire::templates_from_values(records)
    }

    fn request(&self, endpoint: Endpoint, page: u32) -> HrRequest {
        HrRequest {
            path: endpoint.path().to_string(),
            query: vec![
                (String::from("per_page"), self.page_size.to_string()),
                (String::from("page"), page.to_string()),
            ],
            authorization: format!("Bearer {}", self.access_token),
        }
    }
}

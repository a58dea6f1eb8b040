// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A complete, normalized read of the directory.

use crate::client::{HrClient, HrTransport};
use crate::error::HrApiError;
use crate::wire::{self, WireFieldTemplate};
use staffsync::{CodeHints, DepartmentIndex, ExternalEmployee, ExternalRef};
use tracing::info;

/// Everything a preview needs from the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub employees: Vec<ExternalEmployee>,
    pub departments: Vec<ExternalRef>,
    pub employment_types: Vec<ExternalRef>,
    pub templates: Vec<WireFieldTemplate>,
}

impl Directory {
    /// Reads every list from the directory.
    ///
    /// Any failed list fails the whole read.
    ///
    /// # Errors
    ///
    /// Returns the first `HrApiError` encountered.
    pub fn fetch<T: HrTransport>(client: &HrClient<T>) -> Result<Self, HrApiError> {
        let employees: Vec<ExternalEmployee> = client.list_employees()?;
        let departments: Vec<ExternalRef> = client.list_departments()?;
        let employment_types: Vec<ExternalRef> = client.list_employment_types()?;
        let templates: Vec<WireFieldTemplate> = client.list_custom_field_templates()?;
        info!(
            employees = employees.len(),
            departments = departments.len(),
            employment_types = employment_types.len(),
            templates = templates.len(),
            "Read HR directory"
        );
        Ok(Self {
            employees,
            departments,
            employment_types,
            templates,
        })
    }

    /// Builds a directory from exported list documents.
    ///
    /// # Arguments
    ///
    /// * `employees` - Employee list JSON
    /// * `departments` - Department list JSON, if exported
    /// * `templates` - Custom-field template list JSON, if exported
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error if any document does not parse.
    pub fn from_documents(
        employees: &str,
        departments: Option<&str>,
        templates: Option<&str>,
    ) -> Result<Self, HrApiError> {
        Ok(Self {
            employees: wire::parse_employees(employees)?,
            departments: departments.map(wire::parse_refs).transpose()?.unwrap_or_default(),
            employment_types: Vec::new(),
            templates: templates
                .map(wire::parse_templates)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn department_index(&self) -> DepartmentIndex {
        wire::department_index(&self.departments)
    }

    #[must_use]
    pub fn code_hints(&self) -> CodeHints {
        wire::code_hints(&self.templates)
    }
}

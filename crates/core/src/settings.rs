// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::employment::EmploymentFilter;
use crate::error::CoreError;
use crate::qualification::QualificationFieldPattern;
use serde::{Deserialize, Serialize};

/// Base salary given to staff synthesized from the directory.
pub const DEFAULT_BASE_SALARY: i64 = 200_000;

/// Page size requested from the directory.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the directory accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Operator-tunable sync settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Employment types in sync scope (ids or names). Empty includes everyone.
    pub employment_type_filter: EmploymentFilter,
    /// Base salary for staff records created by a sync.
    pub default_base_salary: i64,
    /// `per_page` for directory list requests.
    pub page_size: u32,
    /// Which custom fields describe qualifications.
    pub qualification_field: QualificationFieldPattern,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            employment_type_filter: EmploymentFilter::default(),
            default_base_salary: DEFAULT_BASE_SALARY,
            page_size: DEFAULT_PAGE_SIZE,
            qualification_field: QualificationFieldPattern::default(),
        }
    }
}

impl SyncSettings {
    /// Checks the settings for values no sync could use.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSettings` if the default base salary is
    /// negative or no qualification field prefix is configured.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.default_base_salary < 0 {
            return Err(CoreError::InvalidSettings {
                field: String::from("default_base_salary"),
                message: format!("must not be negative, got {}", self.default_base_salary),
            });
        }
        if self
            .qualification_field
            .prefixes
            .iter()
            .all(|prefix| prefix.trim().is_empty())
        {
            return Err(CoreError::InvalidSettings {
                field: String::from("qualification_field.prefixes"),
                message: String::from("at least one non-blank prefix is required"),
            });
        }
        Ok(())
    }

    /// Returns the page size clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

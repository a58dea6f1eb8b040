// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalized view of an external directory employee ("crew").
//!
//! The directory encodes departments and employment types either as bare
//! strings or as objects. Both collapse into `ExternalRef` at the ingestion
//! boundary so nothing downstream branches on the representation.

use serde::{Deserialize, Serialize};
use staffsync_domain::iso_date;
use time::Date;

/// Separator used by the directory in department paths.
pub const PATH_SEPARATOR: char = '/';

/// A reference to an external department or employment type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalRef {
    /// Directory identifier, when the directory supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short name (last path segment for departments).
    pub name: String,
    /// Full hierarchical path, for departments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
}

impl ExternalRef {
    /// Creates a reference with every part supplied.
    ///
    /// Blank ids and paths are treated as absent.
    #[must_use]
    pub fn new(id: Option<&str>, name: &str, full_path: Option<&str>) -> Self {
        Self {
            id: non_blank(id),
            name: name.trim().to_string(),
            full_path: non_blank(full_path),
        }
    }

    /// Creates a reference from a bare name with no id or path.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(None, name, None)
    }

    /// Creates a department reference from a bare path such as `HQ/Care/North`.
    ///
    /// The short name is the last non-empty segment.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed: &str = path.trim();
        let name: &str = trimmed
            .rsplit(PATH_SEPARATOR)
            .map(str::trim)
            .find(|segment| !segment.is_empty())
            .unwrap_or(trimmed);
        Self::new(None, name, Some(trimmed))
    }

    /// Returns the most specific human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.full_path.as_deref().unwrap_or(&self.name)
    }
}

/// A custom-field value as a `(code, label)` pair.
///
/// Selectable fields usually carry both; free-text fields carry the same
/// text in both slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CustomFieldValue {
    /// A free-text value.
    #[must_use]
    pub fn text(value: &str) -> Self {
        let value: Option<String> = non_blank(Some(value));
        Self {
            code: value.clone(),
            label: value,
        }
    }

    /// A selectable value.
    #[must_use]
    pub fn coded(code: Option<&str>, label: Option<&str>) -> Self {
        Self {
            code: non_blank(code),
            label: non_blank(label),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.code.is_none() && self.label.is_none()
    }

    /// Returns whether either the code or the label equals `value`.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.code.as_deref() == Some(value) || self.label.as_deref() == Some(value)
    }
}

/// One custom field attached to an external employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Name of the field template.
    pub name: String,
    pub value: CustomFieldValue,
}

/// An employee record supplied by the external directory.
///
/// Read-only for the duration of one sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEmployee {
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    pub last_name: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<ExternalRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<ExternalRef>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default, with = "iso_date::option")]
    pub hire_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub termination_date: Option<Date>,
}

impl ExternalEmployee {
    /// Creates an employee with only identity and name populated.
    #[must_use]
    pub fn new(external_id: &str, last_name: &str, first_name: &str) -> Self {
        Self {
            external_id: external_id.to_string(),
            employee_code: None,
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            department: None,
            employment_type: None,
            custom_fields: Vec::new(),
            hire_date: None,
            termination_date: None,
        }
    }

    /// Returns `"{last} {first}"`, dropping whichever part is blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.last_name.trim(), self.first_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Returns the employee code if it is present and non-blank.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.employee_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

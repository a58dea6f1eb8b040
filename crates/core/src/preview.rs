// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reviewable diff between the external directory and the registry.

use serde::{Deserialize, Serialize};
use staffsync_domain::iso_date;
use time::Date;

/// A proposed addition or update of a staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncItem {
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    pub name: String,
    pub office_id: String,
    pub office_name: String,
    pub qualification_ids: Vec<String>,
    #[serde(default, with = "iso_date::option")]
    pub hire_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub termination_date: Option<Date>,
    /// The registry record this item updates. `None` for additions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_staff_id: Option<String>,
}

/// Kind of status change detected for a registered staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusChangeType {
    /// The directory records a termination date.
    Resigned,
    /// The employment type left the sync scope.
    EmploymentTypeChanged,
}

impl StatusChangeType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resigned => "resigned",
            Self::EmploymentTypeChanged => "employment_type_changed",
        }
    }
}

impl std::fmt::Display for StatusChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status change for an already-registered staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeItem {
    pub staff_id: String,
    pub external_id: String,
    pub change_type: StatusChangeType,
    /// Human-readable description for the reviewer.
    pub detail: String,
    #[serde(default, with = "iso_date::option")]
    pub termination_date: Option<Date>,
}

/// Why an external record was not classified as add, update, or status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The employment type is outside the configured sync scope.
    EmploymentTypeOutOfScope {
        /// The employment type label, if the record carried one.
        employment_type: Option<String>,
    },
    /// The record is terminated and no active registry record needs updating.
    AlreadyResigned,
    /// The record has no department.
    DepartmentUnset,
    /// No office could be resolved for the department.
    DepartmentUnmapped {
        /// The department path or name as supplied.
        department: String,
    },
    /// Another external record in the same pass already claimed this staff record.
    DuplicateMatch {
        /// The contested staff record.
        staff_id: String,
    },
    /// Another unmatched external record in the same pass shares this identifier.
    DuplicateExternalRecord {
        /// The repeated external id or employee code.
        identifier: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmploymentTypeOutOfScope { employment_type } => match employment_type {
                Some(label) => write!(f, "Employment type '{label}' is not in sync scope"),
                None => write!(f, "Employment type unset; not in sync scope"),
            },
            Self::AlreadyResigned => write!(f, "Employee has already resigned"),
            Self::DepartmentUnset => write!(f, "Department unset"),
            Self::DepartmentUnmapped { department } => {
                write!(f, "Department '{department}' is not mapped to any office")
            }
            Self::DuplicateMatch { staff_id } => {
                write!(
                    f,
                    "Staff record '{staff_id}' is already matched by another external record"
                )
            }
            Self::DuplicateExternalRecord { identifier } => {
                write!(
                    f,
                    "Identifier '{identifier}' appears on more than one external record"
                )
            }
        }
    }
}

/// An external record left out of this sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    pub name: String,
    pub reason: SkipReason,
}

/// A matched record whose registry state already equals the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnchangedItem {
    pub staff_id: String,
    pub external_id: String,
}

/// Counts per preview category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSummary {
    pub to_add: usize,
    pub to_update: usize,
    pub status_changes: usize,
    pub skipped: usize,
    pub unchanged: usize,
}

/// An immutable snapshot of proposed registry changes.
///
/// A preview is applied whole or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPreview {
    pub to_add: Vec<SyncItem>,
    pub to_update: Vec<SyncItem>,
    pub status_changes: Vec<StatusChangeItem>,
    pub skipped: Vec<SkippedItem>,
    #[serde(default)]
    pub unchanged: Vec<UnchangedItem>,
}

impl SyncPreview {
    #[must_use]
    pub fn summary(&self) -> PreviewSummary {
        PreviewSummary {
            to_add: self.to_add.len(),
            to_update: self.to_update.len(),
            status_changes: self.status_changes.len(),
            skipped: self.skipped.len(),
            unchanged: self.unchanged.len(),
        }
    }

    /// Returns whether applying this preview would change the registry.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.to_add.is_empty() && self.to_update.is_empty() && self.status_changes.is_empty())
    }

    /// Returns whether no external record was classified at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_changes() && self.skipped.is_empty() && self.unchanged.is_empty()
    }
}

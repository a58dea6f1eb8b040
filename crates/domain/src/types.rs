// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// A `YYYY-MM` month used as the comparison key for effective-dated values.
///
/// The representation is fixed-width, so ordering the raw strings
/// orders the months chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EffectiveMonth {
    value: String,
}

impl EffectiveMonth {
    /// Creates a new `EffectiveMonth` from a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEffectiveMonth` if the value is not a
    /// four-digit year, a dash, and a two-digit month between 01 and 12.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let bytes: &[u8] = trimmed.as_bytes();

        let well_formed: bool = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(DomainError::InvalidEffectiveMonth(value.to_string()));
        }

        let month: u8 = trimmed[5..]
            .parse()
            .map_err(|_| DomainError::InvalidEffectiveMonth(value.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidEffectiveMonth(value.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            value: format!("{:04}-{:02}", date.year(), u8::from(date.month())),
        }
    }

    /// Returns the `YYYY-MM` string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for EffectiveMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EffectiveMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EffectiveMonth> for String {
    fn from(month: EffectiveMonth) -> Self {
        month.value
    }
}

impl std::fmt::Display for EffectiveMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One effective-dated change to a staff member's base compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRevision {
    /// Identifier, unique within the owning staff record.
    pub id: String,
    /// First month the amount applies to.
    pub effective_month: EffectiveMonth,
    /// Base pay in integer currency units.
    pub amount: i64,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Creation timestamp; breaks ties between revisions of the same month.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl CompensationRevision {
    /// Creates a new revision.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount` is negative.
    pub fn new(
        id: &str,
        effective_month: EffectiveMonth,
        amount: i64,
        memo: Option<String>,
        created_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(amount));
        }
        Ok(Self {
            id: id.to_string(),
            effective_month,
            amount,
            memo,
            created_at,
        })
    }
}

/// A member of the staff registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Registry identifier.
    pub id: String,
    /// The office this staff member belongs to.
    pub office_id: String,
    /// Display name.
    pub name: String,
    /// Cached amount of the most recent revision.
    ///
    /// Kept consistent by the revision functions in `compensation`.
    pub current_base_salary: i64,
    /// Held qualification identifiers, in the order they were recorded.
    #[serde(default)]
    pub qualification_ids: Vec<String>,
    /// Effective-dated base pay revisions. Order is not significant.
    #[serde(default)]
    pub compensation_history: Vec<CompensationRevision>,
    /// Identifier of the linked external directory record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_employee_id: Option<String>,
    /// Employee code of the linked external directory record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_employee_code: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub hire_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub termination_date: Option<Date>,
    /// When the external directory last touched this record.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_synced_at: Option<OffsetDateTime>,
}

impl StaffRecord {
    /// Creates a staff record with no history, qualifications, or external linkage.
    #[must_use]
    pub fn new(id: &str, office_id: &str, name: &str, current_base_salary: i64) -> Self {
        Self {
            id: id.to_string(),
            office_id: office_id.to_string(),
            name: name.to_string(),
            current_base_salary,
            qualification_ids: Vec::new(),
            compensation_history: Vec::new(),
            external_employee_id: None,
            external_employee_code: None,
            hire_date: None,
            termination_date: None,
            last_synced_at: None,
        }
    }

    /// Returns whether a termination date has been recorded.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }

    /// Returns the base salary applicable to the given month.
    ///
    /// Falls back to `current_base_salary` when no revision is effective yet.
    #[must_use]
    pub fn base_salary_as_of(&self, as_of: &EffectiveMonth) -> i64 {
        crate::compensation::resolve_amount_as_of(
            &self.compensation_history,
            as_of,
            self.current_base_salary,
        )
    }
}

/// The business type an office operates under. Qualification masters are
/// scoped per business type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessType {
    value: String,
}

impl BusinessType {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A qualification that can be held by staff, with its pay allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationMaster {
    pub id: String,
    pub name: String,
    /// Monthly allowance in integer currency units.
    pub allowance: i64,
    /// Lower value means higher precedence.
    pub priority: i32,
    /// Business type this qualification is defined for.
    pub business_type: BusinessType,
    /// Code used by the external directory for this qualification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

/// A care-service office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub id: String,
    pub name: String,
    pub business_type: BusinessType,
    /// Department reference in the external directory (id, name, or path fragment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_department_ref: Option<String>,
}

/// A manually curated association between an external department and an office.
///
/// Any populated key that equals the corresponding value of the external
/// department selects the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_full_path: Option<String>,
    pub office_id: String,
}

/// A manually curated association between an external custom-field value
/// and a qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationMapping {
    /// Name of the external custom field.
    pub field_name: String,
    /// Field value (display name or code). `None` matches any non-empty value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_value: Option<String>,
    pub qualification_id: String,
}

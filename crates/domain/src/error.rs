// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An effective month is not a valid `YYYY-MM` value.
    InvalidEffectiveMonth(String),
    /// A compensation amount is negative.
    InvalidAmount(i64),
    /// A revision does not exist in the staff member's history.
    RevisionNotFound {
        /// The staff record that was searched.
        staff_id: String,
        /// The revision identifier that was requested.
        revision_id: String,
    },
    /// A revision with the same identifier already exists.
    DuplicateRevision {
        /// The staff record that already holds the revision.
        staff_id: String,
        /// The duplicate revision identifier.
        revision_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEffectiveMonth(value) => {
                write!(f, "Invalid effective month '{value}': expected YYYY-MM")
            }
            Self::InvalidAmount(amount) => {
                write!(f, "Invalid amount {amount}: must not be negative")
            }
            Self::RevisionNotFound {
                staff_id,
                revision_id,
            } => {
                write!(
                    f,
                    "Revision '{revision_id}' not found for staff member '{staff_id}'"
                )
            }
            Self::DuplicateRevision {
                staff_id,
                revision_id,
            } => {
                write!(
                    f,
                    "Revision '{revision_id}' already exists for staff member '{staff_id}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

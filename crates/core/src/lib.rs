// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod department;
mod employment;
mod error;
mod executor;
mod external;
mod preview;
mod qualification;
mod reconcile;
mod settings;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use department::{DepartmentIndex, DepartmentMatch, DepartmentResolution, resolve_department};
pub use employment::EmploymentFilter;
pub use error::CoreError;
pub use executor::{AUTO_CREATED_MEMO, ApplyContext, ApplySummary, SyncOutcome, apply};
pub use external::{CustomField, CustomFieldValue, ExternalEmployee, ExternalRef, PATH_SEPARATOR};
pub use preview::{
    PreviewSummary, SkipReason, SkippedItem, StatusChangeItem, StatusChangeType, SyncItem,
    SyncPreview, UnchangedItem,
};
pub use qualification::{CodeHints, QualificationFieldPattern, resolve_qualifications};
pub use reconcile::{ReconciliationInput, generate_preview};
pub use settings::{DEFAULT_BASE_SALARY, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SyncSettings};

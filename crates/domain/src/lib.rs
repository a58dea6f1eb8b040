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

mod compensation;
mod error;
mod qualification;
mod types;

#[cfg(test)]
mod tests;

pub use compensation::{
    RevisionEdit, add_revision, latest_revision, remove_revision, resolve_amount_as_of,
    update_revision,
};
pub use error::DomainError;
pub use qualification::{MonthlyPay, calculate_monthly_pay, select_primary_qualification};

// Re-export public types
pub use types::{
    BusinessType, CompensationRevision, DepartmentMapping, EffectiveMonth, Office,
    QualificationMapping, QualificationMaster, StaffRecord, iso_date,
};

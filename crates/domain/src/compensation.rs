// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective-dated compensation history.
//!
//! Revisions are ordered by `(effective_month, created_at)`. The amount
//! applicable to a month is the greatest revision not later than that month.
//! Every edit returns a new `StaffRecord` whose `current_base_salary` is
//! re-derived from the greatest revision of the full history.

use crate::error::DomainError;
use crate::types::{CompensationRevision, EffectiveMonth, StaffRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A partial edit of an existing revision. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionEdit {
    pub effective_month: Option<EffectiveMonth>,
    pub amount: Option<i64>,
    /// `Some(None)` clears the memo.
    pub memo: Option<Option<String>>,
}

/// Returns the greatest revision by `(effective_month, created_at)`.
#[must_use]
pub fn latest_revision(history: &[CompensationRevision]) -> Option<&CompensationRevision> {
    history
        .iter()
        .max_by(|a, b| effective_order(a, b))
}

/// Resolves the amount in effect for `as_of`.
///
/// Only revisions with `effective_month <= as_of` are considered. Among those,
/// the latest month wins and the latest `created_at` breaks ties. Returns
/// `fallback` when no revision is effective yet.
#[must_use]
pub fn resolve_amount_as_of(
    history: &[CompensationRevision],
    as_of: &EffectiveMonth,
    fallback: i64,
) -> i64 {
    history
        .iter()
        .filter(|revision| revision.effective_month <= *as_of)
        .max_by(|a, b| effective_order(a, b))
        .map_or(fallback, |revision| revision.amount)
}

/// Returns a copy of `staff` with `revision` appended to its history.
///
/// # Errors
///
/// Returns an error if the amount is negative or the revision id is
/// already present in the history.
pub fn add_revision(
    staff: &StaffRecord,
    revision: CompensationRevision,
) -> Result<StaffRecord, DomainError> {
    if revision.amount < 0 {
        return Err(DomainError::InvalidAmount(revision.amount));
    }
    if staff
        .compensation_history
        .iter()
        .any(|existing| existing.id == revision.id)
    {
        return Err(DomainError::DuplicateRevision {
            staff_id: staff.id.clone(),
            revision_id: revision.id,
        });
    }

    let mut updated: StaffRecord = staff.clone();
    updated.compensation_history.push(revision);
    Ok(with_recomputed_salary(updated))
}

/// Returns a copy of `staff` without the revision `revision_id`.
///
/// Removing the last revision leaves `current_base_salary` at its prior value.
///
/// # Errors
///
/// Returns `DomainError::RevisionNotFound` if no such revision exists.
pub fn remove_revision(staff: &StaffRecord, revision_id: &str) -> Result<StaffRecord, DomainError> {
    let position: usize = find_revision(staff, revision_id)?;

    let mut updated: StaffRecord = staff.clone();
    updated.compensation_history.remove(position);
    Ok(with_recomputed_salary(updated))
}

/// Returns a copy of `staff` with the revision `revision_id` edited.
///
/// The revision keeps its id and `created_at`.
///
/// # Errors
///
/// Returns an error if the revision does not exist or the new amount is negative.
pub fn update_revision(
    staff: &StaffRecord,
    revision_id: &str,
    edit: RevisionEdit,
) -> Result<StaffRecord, DomainError> {
    let position: usize = find_revision(staff, revision_id)?;
    if let Some(amount) = edit.amount.filter(|amount| *amount < 0) {
        return Err(DomainError::InvalidAmount(amount));
    }

    let mut updated: StaffRecord = staff.clone();
    let revision: &mut CompensationRevision = &mut updated.compensation_history[position];
    if let Some(effective_month) = edit.effective_month {
        revision.effective_month = effective_month;
    }
    if let Some(amount) = edit.amount {
        revision.amount = amount;
    }
    if let Some(memo) = edit.memo {
        revision.memo = memo;
    }
    Ok(with_recomputed_salary(updated))
}

fn effective_order(a: &CompensationRevision, b: &CompensationRevision) -> Ordering {
    a.effective_month
        .cmp(&b.effective_month)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

fn find_revision(staff: &StaffRecord, revision_id: &str) -> Result<usize, DomainError> {
    staff
        .compensation_history
        .iter()
        .position(|revision| revision.id == revision_id)
        .ok_or_else(|| DomainError::RevisionNotFound {
            staff_id: staff.id.clone(),
            revision_id: revision_id.to_string(),
        })
}

fn with_recomputed_salary(mut staff: StaffRecord) -> StaffRecord {
    if let Some(latest) = latest_revision(&staff.compensation_history) {
        staff.current_base_salary = latest.amount;
    }
    staff
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Primary qualification selection and the monthly pay it feeds into.

use crate::types::{EffectiveMonth, QualificationMaster, StaffRecord};
use serde::{Deserialize, Serialize};

/// Selects the primary qualification among those held.
///
/// The primary is the held qualification with the lowest `priority` value.
/// Ties are broken by the order of `held_ids`: the earlier id wins. Held ids
/// with no master entry are ignored.
///
/// # Arguments
///
/// * `held_ids` - Qualification ids in the staff member's own order
/// * `masters` - The qualification master list to look ids up in
#[must_use]
pub fn select_primary_qualification<'a>(
    held_ids: &[String],
    masters: &'a [QualificationMaster],
) -> Option<&'a QualificationMaster> {
    let mut held: Vec<&QualificationMaster> = held_ids
        .iter()
        .filter_map(|id| masters.iter().find(|master| &master.id == id))
        .collect();

    // Stable sort keeps the held order among equal priorities.
    held.sort_by_key(|master| master.priority);
    held.first().copied()
}

/// Monthly pay for one staff member and one evaluation month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPay {
    /// The evaluation month.
    pub month: EffectiveMonth,
    /// Base salary in effect for the month.
    pub base_salary: i64,
    /// The primary qualification, if any held qualification is known.
    pub primary_qualification_id: Option<String>,
    /// Allowance of the primary qualification (0 when none).
    pub qualification_allowance: i64,
    /// `base_salary + qualification_allowance`.
    pub total: i64,
}

/// Calculates the monthly pay of a staff member for an evaluation month.
///
/// Only the primary qualification's allowance is applied.
#[must_use]
pub fn calculate_monthly_pay(
    staff: &StaffRecord,
    month: &EffectiveMonth,
    masters: &[QualificationMaster],
) -> MonthlyPay {
    let base_salary: i64 = staff.base_salary_as_of(month);
    let primary: Option<&QualificationMaster> =
        select_primary_qualification(&staff.qualification_ids, masters);
    let qualification_allowance: i64 = primary.map_or(0, |master| master.allowance);

    MonthlyPay {
        month: month.clone(),
        base_salary,
        primary_qualification_id: primary.map(|master| master.id.clone()),
        qualification_allowance,
        total: base_salary.saturating_add(qualification_allowance),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BusinessType, CompensationRevision, EffectiveMonth, QualificationMaster, StaffRecord};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn month(value: &str) -> EffectiveMonth {
    EffectiveMonth::new(value).unwrap()
}

pub fn revision_at(
    id: &str,
    effective_month: &str,
    amount: i64,
    created_at: OffsetDateTime,
) -> CompensationRevision {
    CompensationRevision::new(id, month(effective_month), amount, None, created_at).unwrap()
}

pub fn revision(id: &str, effective_month: &str, amount: i64) -> CompensationRevision {
    revision_at(id, effective_month, amount, datetime!(2020-01-01 0:00 UTC))
}

/// The three-step history used across the resolver tests.
pub fn create_test_history() -> Vec<CompensationRevision> {
    vec![
        revision("rev-2020", "2020-04", 220_000),
        revision("rev-2022", "2022-04", 235_000),
        revision("rev-2024", "2024-04", 250_000),
    ]
}

pub fn create_test_staff() -> StaffRecord {
    StaffRecord::new("staff-1", "office-1", "Sato Hanako", 200_000)
}

pub fn create_test_master(id: &str, priority: i32, allowance: i64) -> QualificationMaster {
    QualificationMaster {
        id: id.to_string(),
        name: format!("Qualification {id}"),
        allowance,
        priority,
        business_type: BusinessType::new("home-care"),
        external_code: None,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::external::{ExternalEmployee, ExternalRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of employment types included in a sync pass.
///
/// Entries may be employment-type ids or names. An empty set includes everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmploymentFilter {
    allowed: BTreeSet<String>,
}

impl EmploymentFilter {
    #[must_use]
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|entry| entry.as_ref().trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Returns whether `employee` is in sync scope.
    #[must_use]
    pub fn includes(&self, employee: &ExternalEmployee) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        employee
            .employment_type
            .as_ref()
            .is_some_and(|employment_type| self.allows(employment_type))
    }

    fn allows(&self, employment_type: &ExternalRef) -> bool {
        employment_type
            .id
            .as_ref()
            .is_some_and(|id| self.allowed.contains(id))
            || self.allowed.contains(&employment_type.name)
    }
}

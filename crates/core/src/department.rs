// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of an external department to an internal office.
//!
//! Resolution runs an ordered chain and stops at the first hit:
//!
//! 1. Canonical id from the department index, matched against office refs
//! 2. Exact office ref equality with the department id or short name
//! 3. Department full path ending with an office ref
//! 4. Department full path containing an office ref
//! 5. Manually curated legacy mappings
//!
//! Legacy mappings are a last resort, not an override.

use crate::external::ExternalRef;
use crate::preview::SkipReason;
use serde::{Deserialize, Serialize};
use staffsync_domain::{DepartmentMapping, Office};
use std::collections::BTreeMap;
use tracing::debug;

/// Maps department short names and full paths to the directory's canonical id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentIndex {
    ids_by_key: BTreeMap<String, String>,
}

impl DepartmentIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from the directory's department list.
    ///
    /// Departments without an id are ignored. When two departments share a
    /// short name the first one listed keeps it; full paths are unique.
    #[must_use]
    pub fn from_departments<'a, I>(departments: I) -> Self
    where
        I: IntoIterator<Item = &'a ExternalRef>,
    {
        let mut index: Self = Self::new();
        for department in departments {
            let Some(id) = department.id.as_deref() else {
                continue;
            };
            if let Some(full_path) = department.full_path.as_deref() {
                index.insert(full_path, id);
            }
            index
                .ids_by_key
                .entry(department.name.clone())
                .or_insert_with(|| id.to_string());
        }
        index
    }

    /// Associates `key` (a short name or full path) with `id`.
    pub fn insert(&mut self, key: &str, id: &str) {
        let key: &str = key.trim();
        if !key.is_empty() {
            self.ids_by_key.insert(key.to_string(), id.to_string());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids_by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids_by_key.is_empty()
    }

    /// Returns the canonical id for `department`.
    ///
    /// Looks up the full path first, then the short name, then falls back to
    /// the id the department itself carries.
    #[must_use]
    pub fn canonical_id<'a>(&'a self, department: &'a ExternalRef) -> Option<&'a str> {
        department
            .full_path
            .as_deref()
            .and_then(|path| self.ids_by_key.get(path))
            .or_else(|| self.ids_by_key.get(&department.name))
            .map(String::as_str)
            .or(department.id.as_deref())
    }
}

/// Which step of the chain resolved the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentMatch {
    CanonicalId,
    ExactRef,
    PathSuffix,
    PathContains,
    LegacyMapping,
}

/// Outcome of department resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentResolution {
    Resolved {
        office_id: String,
        office_name: String,
        matched_by: DepartmentMatch,
    },
    Unresolved(SkipReason),
}

/// Resolves `department` to an office.
///
/// # Arguments
///
/// * `department` - The employee's department, if any
/// * `offices` - Offices, searched in order within each step
/// * `index` - Short name / full path to canonical id lookup
/// * `legacy_mappings` - Manually curated fallback table
#[must_use]
pub fn resolve_department(
    department: Option<&ExternalRef>,
    offices: &[Office],
    index: &DepartmentIndex,
    legacy_mappings: &[DepartmentMapping],
) -> DepartmentResolution {
    let Some(department) = department else {
        return DepartmentResolution::Unresolved(SkipReason::DepartmentUnset);
    };

    if let Some(office) = index
        .canonical_id(department)
        .and_then(|canonical_id| find_office(offices, |office_ref| office_ref == canonical_id))
    {
        return resolved(office, DepartmentMatch::CanonicalId);
    }

    if let Some(office) = find_office(offices, |office_ref| {
        department.id.as_deref() == Some(office_ref) || department.name == office_ref
    }) {
        return resolved(office, DepartmentMatch::ExactRef);
    }

    if let Some(full_path) = department.full_path.as_deref() {
        if let Some(office) = find_office(offices, |office_ref| full_path.ends_with(office_ref)) {
            return resolved(office, DepartmentMatch::PathSuffix);
        }
        if let Some(office) = find_office(offices, |office_ref| full_path.contains(office_ref)) {
            return resolved(office, DepartmentMatch::PathContains);
        }
    }

    // Mappings to offices that no longer exist are passed over
    if let Some(office) = legacy_mappings
        .iter()
        .filter(|mapping| legacy_mapping_matches(mapping, department))
        .find_map(|mapping| offices.iter().find(|office| office.id == mapping.office_id))
    {
        return resolved(office, DepartmentMatch::LegacyMapping);
    }

    debug!(department = department.label(), "Department did not resolve");
    DepartmentResolution::Unresolved(SkipReason::DepartmentUnmapped {
        department: department.label().to_string(),
    })
}

/// Finds the first office whose non-blank external ref satisfies `predicate`.
fn find_office<'a, F>(offices: &'a [Office], predicate: F) -> Option<&'a Office>
where
    F: Fn(&str) -> bool,
{
    offices.iter().find(|office| {
        office
            .external_department_ref
            .as_deref()
            .map(str::trim)
            .is_some_and(|office_ref| !office_ref.is_empty() && predicate(office_ref))
    })
}

fn legacy_mapping_matches(mapping: &DepartmentMapping, department: &ExternalRef) -> bool {
    let id_matches: bool = mapping.external_id.is_some() && mapping.external_id == department.id;
    let name_matches: bool = mapping.external_name.as_deref() == Some(department.name.as_str());
    let path_matches: bool =
        mapping.external_full_path.is_some() && mapping.external_full_path == department.full_path;
    id_matches || name_matches || path_matches
}

fn resolved(office: &Office, matched_by: DepartmentMatch) -> DepartmentResolution {
    debug!(office_id = %office.id, ?matched_by, "Department resolved");
    DepartmentResolution::Resolved {
        office_id: office.id.clone(),
        office_name: office.name.clone(),
        matched_by,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mapping of external custom-field values to qualification ids.

use crate::external::{CustomField, CustomFieldValue, ExternalEmployee};
use serde::{Deserialize, Serialize};
use staffsync_domain::{QualificationMapping, QualificationMaster};
use std::collections::BTreeMap;

/// Decides which custom fields describe a held qualification.
///
/// A field qualifies when its name starts with one of `prefixes` and
/// contains none of `excluded_keywords`. ASCII comparison is case-insensitive.
///
/// ASCII keywords only match at the start of a word, so `date` excludes
/// `qualification_acquired_date` but not `qualification_validated`. Other
/// keywords match anywhere in the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualificationFieldPattern {
    pub prefixes: Vec<String>,
    pub excluded_keywords: Vec<String>,
}

impl Default for QualificationFieldPattern {
    fn default() -> Self {
        Self {
            prefixes: ["qualification", "資格"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            excluded_keywords: [
                "certificate",
                "date",
                "renewal",
                "expir",
                "証",
                "日",
                "更新",
                "期限",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

impl QualificationFieldPattern {
    #[must_use]
    pub fn matches(&self, field_name: &str) -> bool {
        let name: String = field_name.trim().to_lowercase();
        let has_prefix: bool = self
            .prefixes
            .iter()
            .any(|prefix| name.starts_with(&prefix.to_lowercase()));
        if !has_prefix {
            return false;
        }

        let words: Vec<String> = split_words(field_name);
        !self.excluded_keywords.iter().any(|keyword| {
            let keyword: String = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                false
            } else if keyword.is_ascii() {
                words.iter().any(|word| word.starts_with(&keyword))
            } else {
                name.contains(&keyword)
            }
        })
    }
}

/// Lowercase words of a field name.
///
/// Words break at non-alphanumeric characters, at camel-case humps, and where
/// ASCII text meets non-ASCII text (`資格date` is two words).
fn split_words(field_name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current: String = String::new();
    let mut previous: Option<char> = None;

    for character in field_name.chars() {
        if !character.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }

        let boundary: bool = previous.is_some_and(|last| {
            (last.is_lowercase() && character.is_uppercase())
                || last.is_ascii() != character.is_ascii()
        });
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(character.to_lowercase());
        previous = Some(character);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Display names of selectable custom-field options, keyed by option code.
///
/// Used to label values the directory sends as a bare code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeHints {
    labels_by_code: BTreeMap<String, String>,
}

impl CodeHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str, label: &str) {
        self.labels_by_code
            .insert(code.trim().to_string(), label.trim().to_string());
    }

    #[must_use]
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.labels_by_code.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels_by_code.is_empty()
    }

    /// Fills in a missing label from the hints.
    fn complete(&self, value: &CustomFieldValue) -> CustomFieldValue {
        let label: Option<String> = value.label.clone().or_else(|| {
            value
                .code
                .as_deref()
                .and_then(|code| self.label_for(code))
                .map(ToString::to_string)
        });
        CustomFieldValue {
            code: value.code.clone(),
            label,
        }
    }
}

/// Resolves the qualification ids an external employee holds.
///
/// Qualification-named fields are matched against `masters` by name, then by
/// external code. Manual mappings contribute independently. Ids are unique and
/// keep first-seen order. Fields that match nothing are ignored.
///
/// # Arguments
///
/// * `employee` - The external record
/// * `masters` - Qualification masters for the employee's business type
/// * `manual_mappings` - Curated field/value to qualification associations
/// * `hints` - Option-code labels from the field templates
/// * `pattern` - Which field names describe qualifications
#[must_use]
pub fn resolve_qualifications(
    employee: &ExternalEmployee,
    masters: &[QualificationMaster],
    manual_mappings: &[QualificationMapping],
    hints: &CodeHints,
    pattern: &QualificationFieldPattern,
) -> Vec<String> {
    let mut qualification_ids: Vec<String> = Vec::new();

    for field in employee
        .custom_fields
        .iter()
        .filter(|field| pattern.matches(&field.name))
    {
        let value: CustomFieldValue = hints.complete(&field.value);
        if let Some(master) = match_master(&value, masters) {
            push_unique(&mut qualification_ids, &master.id);
        }
    }

    for mapping in manual_mappings {
        if employee
            .custom_fields
            .iter()
            .any(|field| manual_mapping_matches(mapping, field, hints))
        {
            push_unique(&mut qualification_ids, &mapping.qualification_id);
        }
    }

    qualification_ids
}

fn match_master<'a>(
    value: &CustomFieldValue,
    masters: &'a [QualificationMaster],
) -> Option<&'a QualificationMaster> {
    let by_name: Option<&QualificationMaster> = value
        .label
        .as_deref()
        .and_then(|label| masters.iter().find(|master| master.name == label));

    by_name.or_else(|| {
        value.code.as_deref().and_then(|code| {
            masters
                .iter()
                .find(|master| master.external_code.as_deref() == Some(code))
        })
    })
}

fn manual_mapping_matches(
    mapping: &QualificationMapping,
    field: &CustomField,
    hints: &CodeHints,
) -> bool {
    if field.name.trim() != mapping.field_name.trim() || field.value.is_empty() {
        return false;
    }
    mapping
        .field_value
        .as_deref()
        .is_none_or(|expected| hints.complete(&field.value).matches(expected.trim()))
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory wire format and its normalization into the core model.
//!
//! The directory is loose about shapes: references arrive either as a bare
//! string or as an object, ids may be numbers, and dates may carry a time
//! part. Everything is normalized here so the reconciler only ever sees
//! `ExternalEmployee` and `ExternalRef`.

use crate::error::HrApiError;
use serde::Deserialize;
use serde_json::Value;
use staffsync::{
    CodeHints, CustomField, CustomFieldValue, DepartmentIndex, ExternalEmployee, ExternalRef,
    PATH_SEPARATOR,
};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// An id the directory may send as a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn normalize(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.trim().to_string()).filter(|text| !text.is_empty()),
            Self::Number(number) => Some(number.to_string()),
        }
    }
}

/// A department or employment-type reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireRef {
    /// A bare label; for departments, a `/`-separated path.
    Text(String),
    Object(WireRefObject),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireRefObject {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "full_path_name")]
    pub full_path: Option<String>,
}

impl WireRefObject {
    fn normalize(&self) -> Option<ExternalRef> {
        let id: Option<String> = self.id.as_ref().and_then(WireId::normalize);
        let full_path: Option<&str> = self
            .full_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty());
        let name: Option<String> = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .or_else(|| full_path.map(|path| ExternalRef::from_path(path).name));

        match (name, id) {
            (Some(name), id) => Some(ExternalRef::new(id.as_deref(), &name, full_path)),
            (None, Some(id)) => Some(ExternalRef::new(Some(&id), &id, full_path)),
            (None, None) => None,
        }
    }
}

/// One custom field on an employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireCustomField {
    /// Present when the field is reported against its template.
    #[serde(default)]
    pub template: Option<WireRefObject>,
    /// Present when the field is reported by name only.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl WireCustomField {
    fn normalize(&self) -> Option<CustomField> {
        let name: String = self
            .template
            .as_ref()
            .and_then(|template| template.name.clone())
            .or_else(|| self.name.clone())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())?;
        Some(CustomField {
            name,
            value: normalize_field_value(&self.value),
        })
    }
}

/// One employee ("crew") as the directory lists it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireEmployee {
    pub id: WireId,
    #[serde(default, alias = "emp_code")]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub department: Option<WireRef>,
    /// Some tenants report several departments; the first one is used.
    #[serde(default)]
    pub departments: Vec<WireRef>,
    #[serde(default)]
    pub employment_type: Option<WireRef>,
    #[serde(default)]
    pub custom_fields: Vec<WireCustomField>,
    #[serde(default, alias = "entered_at")]
    pub hire_date: Option<String>,
    #[serde(default, alias = "resigned_at")]
    pub termination_date: Option<String>,
}

impl WireEmployee {
    /// Converts the wire record into the reconciler's model.
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error if the id is blank or a date
    /// cannot be parsed.
    pub fn normalize(&self) -> Result<ExternalEmployee, HrApiError> {
        let Some(external_id) = self.id.normalize() else {
            return Err(HrApiError::malformed("employee with a blank id"));
        };

        let mut employee: ExternalEmployee = ExternalEmployee::new(
            &external_id,
            self.last_name.as_deref().unwrap_or_default().trim(),
            self.first_name.as_deref().unwrap_or_default().trim(),
        );
        employee.employee_code = self
            .employee_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(ToString::to_string);
        employee.department = self
            .department
            .as_ref()
            .or_else(|| self.departments.first())
            .and_then(normalize_department);
        employee.employment_type = self.employment_type.as_ref().and_then(normalize_label);
        employee.custom_fields = self
            .custom_fields
            .iter()
            .filter_map(WireCustomField::normalize)
            .collect();
        employee.hire_date = parse_date(self.hire_date.as_deref(), &external_id, "hire date")?;
        employee.termination_date = parse_date(
            self.termination_date.as_deref(),
            &external_id,
            "termination date",
        )?;
        Ok(employee)
    }
}

/// A selectable option of a custom-field template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireTemplateOption {
    #[serde(default, alias = "physical_name")]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A custom-field template with its selectable options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireFieldTemplate {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "elements")]
    pub options: Vec<WireTemplateOption>,
}

/// Normalizes a department reference. Bare strings are read as paths.
#[must_use]
pub fn normalize_department(wire: &WireRef) -> Option<ExternalRef> {
    match wire {
        WireRef::Text(path) if path.trim().trim_matches(PATH_SEPARATOR).is_empty() => None,
        WireRef::Text(path) => Some(ExternalRef::from_path(path)),
        WireRef::Object(object) => object.normalize(),
    }
}

/// Normalizes a flat reference such as an employment type.
#[must_use]
pub fn normalize_label(wire: &WireRef) -> Option<ExternalRef> {
    match wire {
        WireRef::Text(label) if label.trim().is_empty() => None,
        WireRef::Text(label) => Some(ExternalRef::named(label)),
        WireRef::Object(object) => object.normalize(),
    }
}

/// Reads a custom-field value in any of the shapes the directory uses.
#[must_use]
pub fn normalize_field_value(value: &Value) -> CustomFieldValue {
    match value {
        Value::String(text) => CustomFieldValue::text(text),
        Value::Number(number) => CustomFieldValue::text(&number.to_string()),
        Value::Bool(flag) => CustomFieldValue::text(&flag.to_string()),
        Value::Object(object) => {
            let code: Option<&str> = ["code", "physical_name", "id"]
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_str));
            let label: Option<&str> = ["name", "label"]
                .iter()
                .find_map(|key| object.get(*key).and_then(Value::as_str));
            CustomFieldValue::coded(code, label)
        }
        Value::Array(values) => values
            .first()
            .map_or_else(CustomFieldValue::default, normalize_field_value),
        Value::Null => CustomFieldValue::default(),
    }
}

/// Collects option-code labels from the field templates.
#[must_use]
pub fn code_hints(templates: &[WireFieldTemplate]) -> CodeHints {
    let mut hints: CodeHints = CodeHints::new();
    for option in templates.iter().flat_map(|template| &template.options) {
        let code: Option<&str> = option.code.as_deref().filter(|code| !code.trim().is_empty());
        let label: Option<&str> = option.name.as_deref().filter(|name| !name.trim().is_empty());
        if let (Some(code), Some(label)) = (code, label) {
            hints.insert(code, label);
        }
    }
    hints
}

/// Builds the department index from the directory's department list.
#[must_use]
pub fn department_index(departments: &[ExternalRef]) -> DepartmentIndex {
    DepartmentIndex::from_departments(departments)
}

/// Normalizes decoded employee records.
///
/// # Errors
///
/// Returns a malformed-response error if a value is not an employee or
/// fails normalization.
pub fn employees_from_values(values: Vec<Value>) -> Result<Vec<ExternalEmployee>, HrApiError> {
    let records: Vec<WireEmployee> = from_values(values, "employee list")?;
    records.iter().map(WireEmployee::normalize).collect()
}

/// Normalizes decoded department or employment-type records. Unusable
/// entries are dropped.
///
/// # Errors
///
/// Returns a malformed-response error if a value is not a reference object.
pub fn refs_from_values(values: Vec<Value>) -> Result<Vec<ExternalRef>, HrApiError> {
    let records: Vec<WireRefObject> = from_values(values, "reference list")?;
    Ok(records.iter().filter_map(WireRefObject::normalize).collect())
}

/// Decodes custom-field template records.
///
/// # Errors
///
/// Returns a malformed-response error if a value is not a template.
pub fn templates_from_values(values: Vec<Value>) -> Result<Vec<WireFieldTemplate>, HrApiError> {
    from_values(values, "template list")
}

/// Parses an employee list document.
///
/// # Errors
///
/// Returns a malformed-response error if the body is not a list of
/// employees or any record fails normalization.
pub fn parse_employees(body: &str) -> Result<Vec<ExternalEmployee>, HrApiError> {
    employees_from_values(parse_list(body)?)
}

/// Parses a department or employment-type list document.
///
/// # Errors
///
/// Returns a malformed-response error if the body is not a list.
pub fn parse_refs(body: &str) -> Result<Vec<ExternalRef>, HrApiError> {
    refs_from_values(parse_list(body)?)
}

/// Parses a custom-field template list document.
///
/// # Errors
///
/// Returns a malformed-response error if the body is not a list of templates.
pub fn parse_templates(body: &str) -> Result<Vec<WireFieldTemplate>, HrApiError> {
    templates_from_values(parse_list(body)?)
}

/// Decodes a JSON array document.
///
/// # Errors
///
/// Returns a malformed-response error if the body is not a JSON array.
pub fn parse_list(body: &str) -> Result<Vec<Value>, HrApiError> {
    serde_json::from_str(body)
        .map_err(|error| HrApiError::malformed(&format!("expected a JSON list: {error}")))
}

fn from_values<T>(values: Vec<Value>, what: &str) -> Result<Vec<T>, HrApiError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(Value::Array(values))
        .map_err(|error| HrApiError::malformed(&format!("invalid {what}: {error}")))
}

fn parse_date(raw: Option<&str>, external_id: &str, what: &str) -> Result<Option<Date>, HrApiError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let day: &str = raw.get(..10).unwrap_or(raw);
    Date::parse(day, DATE_FORMAT).map(Some).map_err(|error| {
        HrApiError::malformed(&format!(
            "employee {external_id} has an invalid {what} '{raw}': {error}"
        ))
    })
}

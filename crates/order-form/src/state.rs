// File: src/state.rs
// Purpose: State derived from form values: per-field errors and the submit gate

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::schema::ValidationSchema;
use crate::values::{FieldName, FormValues};

/// Message per schema field. An empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FieldName, String>);

impl FormErrors {
    /// One empty entry for every field the schema governs
    pub fn cleared(schema: &ValidationSchema) -> Self {
        Self(schema.fields().map(|f| (f, String::new())).collect())
    }

    /// Message for `field`, empty when there is none
    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(|m| !m.is_empty())
    }

    /// Fields currently showing a message
    pub fn failing(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }
}

/// Whether the submit control accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitEnablement {
    #[default]
    Disabled,
    Enabled,
}

impl SubmitEnablement {
    pub fn is_enabled(self) -> bool {
        self == SubmitEnablement::Enabled
    }
}

impl From<bool> for SubmitEnablement {
    fn from(valid: bool) -> Self {
        if valid {
            SubmitEnablement::Enabled
        } else {
            SubmitEnablement::Disabled
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedState {
    pub errors: FormErrors,
    pub submit: SubmitEnablement,
}

/// Recomputes everything derived from `values`.
///
/// Only fields in `revealed` show their message; the rest stay empty so a
/// pristine form does not open covered in errors. The submit gate always
/// checks the whole schema.
pub fn derive_state(
    values: &FormValues,
    schema: &ValidationSchema,
    revealed: &BTreeSet<FieldName>,
) -> DerivedState {
    let mut errors = FormErrors::cleared(schema);
    for field in schema.fields().filter(|f| revealed.contains(f)) {
        if let Err(failure) = schema.validate_field(field, values) {
            errors.set(field, failure.message);
        }
    }

    DerivedState {
        errors,
        submit: schema.is_valid(values).into(),
    }
}

// File: src/event.rs
// Purpose: Input events as the form controls deliver them

use order_form_types::{UnknownSize, UnknownTopping};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Control type carried by a change event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    SelectOne,
    Checkbox,
}

/// A field-change event: `{name, value, type, checked}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldEvent {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "type")]
    pub input_type: InputType,
    #[serde(default)]
    pub checked: bool,
}

impl FieldEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            input_type: InputType::Text,
            checked: false,
        }
    }

    pub fn select(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            input_type: InputType::SelectOne,
            ..Self::text(name, value)
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            value: "on".to_string(),
            input_type: InputType::Checkbox,
            checked,
        }
    }

    pub fn is_multi_value(&self) -> bool {
        self.input_type == InputType::Checkbox
    }
}

/// Anything the form can be asked to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormCommand {
    Field(FieldEvent),
    Submit,
    Reset,
}

/// A change the form cannot apply. FormValues are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldChangeError {
    #[error("unknown form field {0:?}")]
    UnknownField(String),
    #[error(transparent)]
    UnknownTopping(#[from] UnknownTopping),
    #[error(transparent)]
    UnknownSize(#[from] UnknownSize),
}

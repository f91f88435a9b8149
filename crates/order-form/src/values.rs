// File: src/values.rs
// Purpose: Current user-entered state of the order form

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use order_form_types::{PizzaSize, Topping};
use serde::{Deserialize, Serialize};

/// Fields of the order form, named as the form controls name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Size,
    Toppings,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Size => "size",
            FieldName::Toppings => "toppings",
        }
    }
}

impl FromStr for FieldName {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fullName" => Ok(FieldName::FullName),
            "size" => Ok(FieldName::Size),
            "toppings" => Ok(FieldName::Toppings),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the customer has entered so far. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub size: Option<PizzaSize>,
    pub toppings: BTreeSet<Topping>,
}

impl FormValues {
    /// Text a schema rule sees for `field`. Toppings have no text form.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Size => Some(self.size.map(PizzaSize::code).unwrap_or("")),
            FieldName::Toppings => None,
        }
    }

    pub fn is_initial(&self) -> bool {
        *self == FormValues::default()
    }
}

//! Validated domain types for the pizza order form
//!
//! The form itself has to hold whatever the customer typed, valid or not.
//! These types are what comes out the other side of a successful submission:
//! once a `ValidatedOrder` exists, every field in it is known to be good.
//!
//! - `CustomerName` - trimmed, non-empty name (nutype)
//! - `PizzaSize` - one of the three size codes `S`, `M`, `L`
//! - `Topping` - one entry of the fixed topping catalog
//! - `ValidatedOrder` - the three of them together

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use nutype::nutype;
use order_form_validation::is_one_of;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Customer name
// =============================================================================

/// Customer name as printed on the confirmation.
///
/// Surrounding whitespace is stripped on construction. The minimum length is a
/// form rule and lives in the schema, not here.
///
/// ```rust,ignore
/// let name = CustomerName::try_new("  Alice ".to_string())?;
/// assert_eq!(name.as_ref(), "Alice");
/// ```
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CustomerName(String);

// =============================================================================
// Size
// =============================================================================

/// Codes accepted by the size select, in display order.
pub const SIZE_CODES: &[&str] = &["S", "M", "L"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pizza size code {0:?}, expected one of S, M, L")]
pub struct UnknownSize(pub String);

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    /// Single-letter code used by the size select
    pub fn code(self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    /// Word used in the confirmation message
    pub fn label(self) -> &'static str {
        match self {
            PizzaSize::Small => "small",
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
        }
    }

    /// Parses the select value. The empty placeholder choice maps to `None`.
    pub fn parse_choice(code: &str) -> Result<Option<PizzaSize>, UnknownSize> {
        if code.is_empty() {
            Ok(None)
        } else {
            code.parse().map(Some)
        }
    }
}

impl FromStr for PizzaSize {
    type Err = UnknownSize;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if !is_one_of(code, SIZE_CODES) {
            return Err(UnknownSize(code.to_string()));
        }
        Ok(match code {
            "S" => PizzaSize::Small,
            "M" => PizzaSize::Medium,
            _ => PizzaSize::Large,
        })
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Toppings
// =============================================================================

/// The fixed topping catalog. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topping {
    Pepperoni,
    #[serde(rename = "Green Peppers")]
    GreenPeppers,
    Pineapple,
    Mushrooms,
    Ham,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topping {0:?}")]
pub struct UnknownTopping(pub String);

impl Topping {
    pub const CATALOG: [Topping; 5] = [
        Topping::Pepperoni,
        Topping::GreenPeppers,
        Topping::Pineapple,
        Topping::Mushrooms,
        Topping::Ham,
    ];

    /// Name as shown next to the checkbox, also used as the checkbox `name`
    pub fn name(self) -> &'static str {
        match self {
            Topping::Pepperoni => "Pepperoni",
            Topping::GreenPeppers => "Green Peppers",
            Topping::Pineapple => "Pineapple",
            Topping::Mushrooms => "Mushrooms",
            Topping::Ham => "Ham",
        }
    }
}

impl FromStr for Topping {
    type Err = UnknownTopping;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Topping::CATALOG
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| UnknownTopping(name.to_string()))
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order whose fields have all passed the form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub customer: CustomerName,
    pub size: PizzaSize,
    pub toppings: BTreeSet<Topping>,
}

impl ValidatedOrder {
    /// "with 1 topping", "with 2 toppings" or "with no toppings"
    pub fn toppings_phrase(&self) -> String {
        match self.toppings.len() {
            0 => "with no toppings".to_string(),
            1 => "with 1 topping".to_string(),
            n => format!("with {} toppings", n),
        }
    }
}

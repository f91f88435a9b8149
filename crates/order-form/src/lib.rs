//! # order-form
//!
//! Validation state machine for a pizza order form.
//!
//! The form holds a customer name, a size and a set of toppings. Each field
//! change re-derives the per-field error messages and whether the submit
//! control is enabled. Submitting either produces a confirmation message and
//! resets the form, or reports every failing field.
//!
//! ## Quick Start
//!
//! ```rust
//! use order_form::{OrderFormValidator, SubmitOutcome};
//!
//! let mut form = OrderFormValidator::default();
//! form.on_field_change("fullName", "Alice", false).unwrap();
//! form.on_field_change("size", "M", false).unwrap();
//! form.on_field_change("Pepperoni", "", true).unwrap();
//! assert!(form.submit_enablement().is_enabled());
//!
//! match form.on_submit() {
//!     SubmitOutcome::Confirmed(message) => {
//!         assert!(message.as_str().contains("medium pizza with 1 topping"));
//!     }
//!     SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {:?}", errors),
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`order-form-validation`** - rule primitives (no_std compatible)
//! - **`order-form-types`** - validated types (`CustomerName`, `PizzaSize`, `Topping`)
//! - **`order-form`** - this crate: schema, derived state and the validator

pub mod config;
pub mod event;
pub mod message;
pub mod schema;
pub mod state;
pub mod validator;
pub mod values;

pub use config::FormConfig;
pub use event::{FieldChangeError, FieldEvent, FormCommand, InputType};
pub use message::ConfirmationMessage;
pub use schema::{FieldError, FieldFailure, FieldRule, ValidationSchema};
pub use state::{derive_state, DerivedState, FormErrors, SubmitEnablement};
pub use validator::{FormSnapshot, OrderFormValidator, SubmitOutcome};
pub use values::{FieldName, FormValues};

// Re-export the domain types so callers need a single dependency
pub use order_form_types::{CustomerName, PizzaSize, Topping, ValidatedOrder};

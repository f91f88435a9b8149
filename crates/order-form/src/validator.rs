// File: src/validator.rs
// Purpose: The order form state machine: field changes, re-derivation and submit

use std::collections::BTreeSet;

use order_form_types::{PizzaSize, Topping};
use order_form_validation::{set_membership, toggle_membership};
use serde::Serialize;
use tracing::{debug, info};

use crate::event::{FieldChangeError, FieldEvent};
use crate::message::ConfirmationMessage;
use crate::schema::ValidationSchema;
use crate::state::{derive_state, DerivedState, FormErrors, SubmitEnablement};
use crate::values::{FieldName, FormValues};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values passed; the form has been reset.
    Confirmed(ConfirmationMessage),
    /// Values failed; one message per failing field, values kept.
    Rejected(FormErrors),
}

/// Everything a view of the form needs, in one serializable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: FormErrors,
    pub submit: SubmitEnablement,
    pub message: Option<ConfirmationMessage>,
}

#[derive(Debug, Clone, Copy)]
enum ToppingChange {
    Toggle,
    Set(bool),
}

/// Owns the form values and keeps errors and the submit gate in step with
/// them. Every mutation re-derives before returning, so reads never observe
/// stale state.
#[derive(Debug, Clone)]
pub struct OrderFormValidator {
    schema: ValidationSchema,
    values: FormValues,
    revealed: BTreeSet<FieldName>,
    derived: DerivedState,
    message: Option<ConfirmationMessage>,
}

impl Default for OrderFormValidator {
    fn default() -> Self {
        Self::new(ValidationSchema::default())
    }
}

impl OrderFormValidator {
    pub fn new(schema: ValidationSchema) -> Self {
        let mut form = Self {
            schema,
            values: FormValues::default(),
            revealed: BTreeSet::new(),
            derived: DerivedState::default(),
            message: None,
        };
        form.revalidate_all();
        form
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.derived.errors
    }

    pub fn submit_enablement(&self) -> SubmitEnablement {
        self.derived.submit
    }

    /// Confirmation from the last successful submit, if any
    pub fn message(&self) -> Option<&ConfirmationMessage> {
        self.message.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.derived.errors.clone(),
            submit: self.derived.submit,
            message: self.message.clone(),
        }
    }

    /// Applies a change to one field.
    ///
    /// `fullName` is trimmed. With `is_multi_value` the change toggles a
    /// topping, named either by `name` itself (a checkbox per topping) or by
    /// `raw_value` when `name` is `toppings`.
    pub fn on_field_change(
        &mut self,
        name: &str,
        raw_value: &str,
        is_multi_value: bool,
    ) -> Result<(), FieldChangeError> {
        let change = is_multi_value.then_some(ToppingChange::Toggle);
        self.change(name, raw_value, change)
    }

    /// Applies a raw control event. Checkboxes follow `checked` rather than
    /// toggling, so a repeated event is harmless.
    pub fn apply_event(&mut self, event: &FieldEvent) -> Result<(), FieldChangeError> {
        let change = event
            .is_multi_value()
            .then_some(ToppingChange::Set(event.checked));
        self.change(&event.name, &event.value, change)
    }

    /// Re-derives errors and the submit gate from the current values.
    pub fn revalidate_all(&mut self) -> SubmitEnablement {
        self.derived = derive_state(&self.values, &self.schema, &self.revealed);
        self.derived.submit
    }

    /// Validates every field at once. On success the form resets and the
    /// confirmation is kept for display; on failure every schema field shows
    /// its current status and the values stay as they were.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.revealed.extend(self.schema.fields());

        match self.schema.validate_order(&self.values) {
            Ok(order) => {
                let message = ConfirmationMessage::for_order(&order);
                info!(
                    size = %order.size,
                    toppings = order.toppings.len(),
                    "Order submitted"
                );

                self.values = FormValues::default();
                self.revealed.clear();
                self.revalidate_all();
                self.message = Some(message.clone());
                SubmitOutcome::Confirmed(message)
            }
            Err(failures) => {
                debug!("Submit rejected with {} failing field(s)", failures.len());
                self.message = None;
                self.revalidate_all();
                SubmitOutcome::Rejected(self.derived.errors.clone())
            }
        }
    }

    /// Back to the initial state, discarding any confirmation
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.revealed.clear();
        self.message = None;
        self.revalidate_all();
    }

    fn change(
        &mut self,
        name: &str,
        raw_value: &str,
        topping_change: Option<ToppingChange>,
    ) -> Result<(), FieldChangeError> {
        let field = match self.update_values(name, raw_value, topping_change) {
            Ok(field) => field,
            Err(e) => {
                debug!("Rejected change to {:?}: {}", name, e);
                return Err(e);
            }
        };

        if self.schema.governs(field) {
            self.revealed.insert(field);
        }
        let submit = self.revalidate_all();
        debug!(
            field = %field,
            error = self.derived.errors.get(field),
            ?submit,
            "Field changed"
        );
        Ok(())
    }

    fn update_values(
        &mut self,
        name: &str,
        raw_value: &str,
        topping_change: Option<ToppingChange>,
    ) -> Result<FieldName, FieldChangeError> {
        if let Some(change) = topping_change {
            let topping_name = if name == FieldName::Toppings.as_str() {
                raw_value
            } else {
                name
            };
            let topping: Topping = topping_name.parse()?;
            match change {
                ToppingChange::Toggle => {
                    toggle_membership(&mut self.values.toppings, topping);
                }
                ToppingChange::Set(checked) => {
                    set_membership(&mut self.values.toppings, topping, checked);
                }
            }
            return Ok(FieldName::Toppings);
        }

        match name.parse::<FieldName>() {
            Ok(FieldName::FullName) => {
                self.values.full_name = raw_value.trim().to_string();
                Ok(FieldName::FullName)
            }
            Ok(FieldName::Size) => {
                self.values.size = PizzaSize::parse_choice(raw_value)?;
                Ok(FieldName::Size)
            }
            _ => Err(FieldChangeError::UnknownField(name.to_string())),
        }
    }
}

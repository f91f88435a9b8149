// File: src/message.rs
// Purpose: Confirmation text built from a validated order

use std::fmt;

use order_form_types::ValidatedOrder;
use serde::{Deserialize, Serialize};

/// Two-line, newline-delimited confirmation shown after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationMessage(String);

impl ConfirmationMessage {
    pub fn for_order(order: &ValidatedOrder) -> Self {
        Self(format!(
            "Thank you for your order, {}!\nYour {} pizza {} is on the way!",
            order.customer,
            order.size.label(),
            order.toppings_phrase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines as displayed, one paragraph each
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}

impl fmt::Display for ConfirmationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// File: src/schema.rs
// Purpose: Declarative per-field rule table and the two validation entry points

use order_form_types::{CustomerName, ValidatedOrder};
use order_form_validation::{validate_min_length, validate_required, RuleViolation};
use thiserror::Error;

use crate::config::FormConfig;
use crate::values::{FieldName, FormValues};

/// Why a single field failed. Messages here are generic; the user-facing text
/// comes from the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("value is required")]
    Required,
    #[error("value must be at least {min} characters")]
    TooShort { min: usize },
}

impl From<RuleViolation> for FieldError {
    fn from(violation: RuleViolation) -> Self {
        match violation {
            RuleViolation::Missing => FieldError::Required,
            RuleViolation::BelowMinLength { min, .. } => FieldError::TooShort { min },
        }
    }
}

/// A single named predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    MinLength(usize),
}

impl FieldRule {
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            FieldRule::Required => validate_required(value),
            FieldRule::MinLength(min) => validate_min_length(value, min),
        }
        .map_err(FieldError::from)
    }
}

/// A failed field together with the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: FieldName,
    pub error: FieldError,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RuleEntry {
    rule: FieldRule,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSchema {
    field: FieldName,
    rules: Vec<RuleEntry>,
}

/// Ordered rules per field. Within a field, the first failing rule wins.
/// Fields without an entry (toppings) are unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: Vec<FieldSchema>,
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl ValidationSchema {
    pub fn from_config(config: &FormConfig) -> Self {
        let messages = &config.messages;
        let fields = vec![
            FieldSchema {
                field: FieldName::FullName,
                rules: vec![
                    RuleEntry {
                        rule: FieldRule::Required,
                        message: messages.full_name_required.clone(),
                    },
                    RuleEntry {
                        rule: FieldRule::MinLength(config.validation.full_name_min_length),
                        message: messages.full_name_too_short.clone(),
                    },
                ],
            },
            FieldSchema {
                field: FieldName::Size,
                rules: vec![RuleEntry {
                    rule: FieldRule::Required,
                    message: messages.size_required.clone(),
                }],
            },
        ];
        Self { fields }
    }

    /// Fields that carry at least one rule, in schema order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|f| f.field)
    }

    pub fn governs(&self, field: FieldName) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    /// Rules attached to `field`, in evaluation order
    pub fn rules(&self, field: FieldName) -> Vec<FieldRule> {
        self.entry(field)
            .map(|f| f.rules.iter().map(|r| r.rule).collect())
            .unwrap_or_default()
    }

    /// Validates one field. Ungoverned fields always pass.
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Result<(), FieldFailure> {
        let (Some(schema), Some(text)) = (self.entry(field), values.text(field)) else {
            return Ok(());
        };

        for entry in &schema.rules {
            if let Err(error) = entry.rule.check(text) {
                return Err(FieldFailure {
                    field,
                    error,
                    message: entry.message.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validates every governed field, collecting all failures.
    pub fn validate_all(&self, values: &FormValues) -> Result<(), Vec<FieldFailure>> {
        let failures: Vec<FieldFailure> = self
            .fields()
            .filter_map(|field| self.validate_field(field, values).err())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.validate_all(values).is_ok()
    }

    /// Runs `validate_all` and turns passing values into a typed order.
    pub fn validate_order(&self, values: &FormValues) -> Result<ValidatedOrder, Vec<FieldFailure>> {
        self.validate_all(values)?;

        // The rule table always requires both fields, so these only fail if a
        // hand-built schema dropped a required rule.
        let customer = CustomerName::try_new(values.full_name.clone())
            .map_err(|_| vec![self.required_failure(FieldName::FullName)])?;
        let size = values
            .size
            .ok_or_else(|| vec![self.required_failure(FieldName::Size)])?;

        Ok(ValidatedOrder {
            customer,
            size,
            toppings: values.toppings.clone(),
        })
    }

    fn entry(&self, field: FieldName) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == field)
    }

    fn required_failure(&self, field: FieldName) -> FieldFailure {
        let message = self
            .entry(field)
            .and_then(|f| f.rules.iter().find(|r| r.rule == FieldRule::Required))
            .map(|r| r.message.clone())
            .unwrap_or_else(|| format!("{} is required", field));
        FieldFailure {
            field,
            error: FieldError::Required,
            message,
        }
    }
}

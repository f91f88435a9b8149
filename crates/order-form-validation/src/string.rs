//! String validation functions

use crate::RuleViolation;

/// Length in characters, not bytes, so "Zoë" counts as 3.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Fails when the value is empty after trimming surrounding whitespace
pub fn validate_required(s: &str) -> Result<(), RuleViolation> {
    if s.trim().is_empty() {
        Err(RuleViolation::Missing)
    } else {
        Ok(())
    }
}

/// Validates trimmed character length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), RuleViolation> {
    let actual = char_len(s.trim());
    if actual >= min {
        Ok(())
    } else {
        Err(RuleViolation::BelowMinLength { min, actual })
    }
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

// ✅ Input validation for the value field
// Only two rules: the text is present, and it reads as a number

use crate::error::ValidationError;

/// Validate raw input text before it becomes an entry.
pub fn validate_input(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyValue);
    }

    if !is_numeric(text) {
        return Err(ValidationError::NotNumeric);
    }

    Ok(())
}

/// True when `text` is a finite decimal number with a point separator.
/// Surrounding whitespace is tolerated, whitespace alone is not.
pub fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    // f64::from_str also accepts "inf"/"NaN" spellings
    matches!(trimmed.parse::<f64>(), Ok(v) if v.is_finite())
}

//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SurrealDB TEXT-like fields have no built-in length enforcement,
//! so CRUD handlers apply these limits before any write.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer / member names, majors, departments
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, print types, paper sizes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Postal addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Original filenames as declared by the client
pub const MAX_FILENAME_LEN: usize = 255;

/// Upper bound for copies/quantity fields. Keeps `copies * price` far from
/// the u32 ceiling; no real print run comes close.
pub const MAX_QUANTITY: u32 = 10_000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Parse a copies/quantity field from request text.
///
/// Non-numeric input and values outside [1, MAX_QUANTITY] are rejected rather
/// than coerced: the parsed value multiplies directly into the total price.
pub fn parse_quantity(value: &str, field: &str) -> Result<u32, AppError> {
    let n: u32 = value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{field} must be a positive integer")))?;
    if n < 1 {
        return Err(AppError::validation(format!("{field} must be at least 1")));
    }
    if n > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "{field} must be at most {MAX_QUANTITY}"
        )));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Somsak", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_absent() {
        assert!(validate_optional_text(&None, "company", MAX_NAME_LEN).is_ok());
        let long = Some("x".repeat(MAX_NAME_LEN + 1));
        assert!(validate_optional_text(&long, "company", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn quantity_rejects_garbage_zero_and_negatives() {
        assert!(parse_quantity("abc", "copies").is_err());
        assert!(parse_quantity("0", "copies").is_err());
        assert!(parse_quantity("-3", "copies").is_err());
        assert!(parse_quantity("3.5", "copies").is_err());
        assert_eq!(parse_quantity(" 3 ", "copies").unwrap(), 3);
    }

    #[test]
    fn quantity_bounded_above() {
        // u32::MAX would overflow the price multiply downstream
        assert!(parse_quantity("4294967295", "copies").is_err());
        assert!(parse_quantity(&(MAX_QUANTITY + 1).to_string(), "copies").is_err());
        assert_eq!(
            parse_quantity(&MAX_QUANTITY.to_string(), "copies").unwrap(),
            MAX_QUANTITY
        );
    }
}

//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! repositories. SurrealDB enforces no text lengths on its own. The
//! helpers return plain messages so callers wrap them in their own
//! error type.

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: schedule titles, equipment names, customer names, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, special requests, medical conditions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: dates, times, certification numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// A required string must be non-empty and within the length limit.
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.len() > max_len {
        return Err(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ));
    }
    Ok(())
}

/// An optional string, when present, must be within the length limit.
pub fn validate_optional_text(
    field: &str,
    value: &Option<String>,
    max_len: usize,
) -> Result<(), String> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ));
    }
    Ok(())
}

/// A numeric amount must be finite and non-negative.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), String> {
    if value < 0.0 || !value.is_finite() {
        return Err(format!("{field} must be a non-negative number"));
    }
    Ok(())
}

/// A count must be at least `min`.
pub fn validate_min_count(field: &str, value: i64, min: i64) -> Result<(), String> {
    if value < min {
        return Err(format!("{field} must be at least {min}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("title", "", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("title", "   ", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("title", "Reef Dive", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text("title", &long, MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text("notes", &None, MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text("notes", &long, MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative("price", 0.0).is_ok());
        assert!(validate_non_negative("price", 75.5).is_ok());
        assert!(validate_non_negative("price", -0.01).is_err());
        assert!(validate_non_negative("price", f64::NAN).is_err());
    }

    #[test]
    fn test_min_count() {
        assert!(validate_min_count("quantity", 1, 1).is_ok());
        assert!(validate_min_count("quantity", 0, 1).is_err());
    }
}

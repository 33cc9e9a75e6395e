//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::ledger::LedgerError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, room number, identity document number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Amenity labels
pub const MAX_AMENITY_LEN: usize = 64;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::MissingCustomerField(field));
    }
    validate_max_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
) -> Result<(), LedgerError> {
    if let Some(v) = value {
        validate_max_len(v, field, max_len)?;
    }
    Ok(())
}

/// Validate only the length of a string (in chars).
pub fn validate_max_len(value: &str, field: &'static str, max: usize) -> Result<(), LedgerError> {
    let len = value.chars().count();
    if len > max {
        return Err(LedgerError::FieldTooLong { field, len, max });
    }
    Ok(())
}

//! Unified error codes for the front-desk ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
//! - 6xxx: Customer errors
//! - 7xxx: Room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire so callers can branch on the
/// specific reason without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    /// Invalid request
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Day count must be at least one
    InvalidDays = 4002,
    /// Checkout is not after checkin
    InvalidDateRange = 4003,
    /// Guest count must be at least one
    InvalidGuestCount = 4004,
    /// Total amount must be positive
    InvalidTotalAmount = 4005,

    // ==================== 5xxx: Payment ====================
    /// Advance exceeds the total amount
    InvalidAdvance = 5001,
    /// Advance is negative
    NegativeAdvance = 5002,
    /// Payment amount must be positive
    InvalidPaymentAmount = 5003,
    /// Payment exceeds the outstanding balance
    Overpayment = 5004,

    // ==================== 6xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 6001,
    /// Required customer field missing
    CustomerFieldMissing = 6002,
    /// Phone number already registered
    CustomerPhoneExists = 6003,

    // ==================== 7xxx: Room ====================
    /// Room not found
    RoomNotFound = 7001,
    /// Room is not vacant
    RoomNotVacant = 7002,
    /// Room number already in use
    RoomNumberExists = 7003,
    /// Room price must be positive
    InvalidRoomPrice = 7004,

    // ==================== 9xxx: System ====================
    StorageError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidDays => "Number of days must be at least 1",
            ErrorCode::InvalidDateRange => "Check-out must be after check-in",
            ErrorCode::InvalidGuestCount => "Guest count must be at least 1",
            ErrorCode::InvalidTotalAmount => "Total amount must be greater than 0",

            // Payment
            ErrorCode::InvalidAdvance => "Advance amount cannot be greater than total amount",
            ErrorCode::NegativeAdvance => "Advance amount cannot be negative",
            ErrorCode::InvalidPaymentAmount => "Payment amount must be greater than 0",
            ErrorCode::Overpayment => "Payment exceeds the outstanding balance",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerFieldMissing => "Required customer field is missing",
            ErrorCode::CustomerPhoneExists => "A customer with this phone number already exists",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNotVacant => "Room is not vacant",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::InvalidRoomPrice => "Room price must be greater than 0",

            // System
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::InvalidDays),
            4003 => Ok(ErrorCode::InvalidDateRange),
            4004 => Ok(ErrorCode::InvalidGuestCount),
            4005 => Ok(ErrorCode::InvalidTotalAmount),

            // Payment
            5001 => Ok(ErrorCode::InvalidAdvance),
            5002 => Ok(ErrorCode::NegativeAdvance),
            5003 => Ok(ErrorCode::InvalidPaymentAmount),
            5004 => Ok(ErrorCode::Overpayment),

            // Customer
            6001 => Ok(ErrorCode::CustomerNotFound),
            6002 => Ok(ErrorCode::CustomerFieldMissing),
            6003 => Ok(ErrorCode::CustomerPhoneExists),

            // Room
            7001 => Ok(ErrorCode::RoomNotFound),
            7002 => Ok(ErrorCode::RoomNotVacant),
            7003 => Ok(ErrorCode::RoomNumberExists),
            7004 => Ok(ErrorCode::InvalidRoomPrice),

            // System
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

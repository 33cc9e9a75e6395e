use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::billing::ResolveError;
use crate::pricing::RateError;

/// Broad class of a ledger rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid input
    Validation,
    /// Input is fine but clashes with current state
    Conflict,
    /// Referenced entity does not exist
    NotFound,
}

/// Ledger errors
///
/// Every rejection leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Customer {0} is required")]
    MissingCustomerField(&'static str),

    #[error("{field} is too long ({len} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    #[error("Room {room_number} is not vacant")]
    RoomNotVacant { room_id: i64, room_number: String },

    #[error("Room number is required")]
    MissingRoomNumber,

    #[error("Room number already exists: {0}")]
    DuplicateRoomNumber(String),

    #[error("Room price must be greater than 0, got {0}")]
    InvalidRoomPrice(f64),

    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    #[error("A customer with phone {0} already exists")]
    DuplicatePhone(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Payment amount must be greater than 0, got {0}")]
    InvalidPaymentAmount(f64),

    #[error("Payment of {amount} exceeds the outstanding balance of {pending}")]
    Overpayment { amount: f64, pending: f64 },
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::RoomNotFound(_)
            | LedgerError::CustomerNotFound(_)
            | LedgerError::BookingNotFound(_) => ErrorKind::NotFound,

            LedgerError::RoomNotVacant { .. }
            | LedgerError::DuplicateRoomNumber(_)
            | LedgerError::DuplicatePhone(_) => ErrorKind::Conflict,

            LedgerError::MissingCustomerField(_)
            | LedgerError::FieldTooLong { .. }
            | LedgerError::MissingRoomNumber
            | LedgerError::InvalidRoomPrice(_)
            | LedgerError::Rate(_)
            | LedgerError::Resolve(_)
            | LedgerError::InvalidPaymentAmount(_)
            | LedgerError::Overpayment { .. } => ErrorKind::Validation,
        }
    }

    /// Wire error code for this rejection
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::MissingCustomerField(_) => ErrorCode::CustomerFieldMissing,
            LedgerError::FieldTooLong { .. } => ErrorCode::ValueOutOfRange,
            LedgerError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            LedgerError::RoomNotVacant { .. } => ErrorCode::RoomNotVacant,
            LedgerError::MissingRoomNumber => ErrorCode::RequiredField,
            LedgerError::DuplicateRoomNumber(_) => ErrorCode::RoomNumberExists,
            LedgerError::InvalidRoomPrice(_) => ErrorCode::InvalidRoomPrice,
            LedgerError::CustomerNotFound(_) => ErrorCode::CustomerNotFound,
            LedgerError::DuplicatePhone(_) => ErrorCode::CustomerPhoneExists,
            LedgerError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            LedgerError::Rate(e) => match e {
                RateError::InvalidDays(_) => ErrorCode::InvalidDays,
                RateError::InvalidRange { .. } => ErrorCode::InvalidDateRange,
                RateError::InvalidGuestCount(_) => ErrorCode::InvalidGuestCount,
            },
            LedgerError::Resolve(e) => match e {
                ResolveError::NonPositiveTotal(_) => ErrorCode::InvalidTotalAmount,
                ResolveError::NegativeAdvance(_) => ErrorCode::NegativeAdvance,
                ResolveError::InvalidAdvance { .. } => ErrorCode::InvalidAdvance,
            },
            LedgerError::InvalidPaymentAmount(_) => ErrorCode::InvalidPaymentAmount,
            LedgerError::Overpayment { .. } => ErrorCode::Overpayment,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            LedgerError::MissingCustomerField(field) => app.with_detail("field", field),
            LedgerError::FieldTooLong { field, max, .. } => {
                app.with_detail("field", field).with_detail("max", max)
            }
            LedgerError::RoomNotFound(id) => app.with_detail("room_id", id),
            LedgerError::RoomNotVacant {
                room_id,
                room_number,
            } => app
                .with_detail("room_id", room_id)
                .with_detail("room_number", room_number),
            LedgerError::DuplicateRoomNumber(number) => app.with_detail("room_number", number),
            LedgerError::CustomerNotFound(id) => app.with_detail("customer_id", id),
            LedgerError::DuplicatePhone(phone) => app.with_detail("phone", phone),
            LedgerError::BookingNotFound(id) => app.with_detail("booking_id", id),
            LedgerError::Resolve(ResolveError::InvalidAdvance { total, advance }) => app
                .with_detail("total_amount", total)
                .with_detail("advance_amount", advance),
            LedgerError::Overpayment { amount, pending } => app
                .with_detail("amount", amount)
                .with_detail("pending", pending),
            _ => app,
        }
    }
}

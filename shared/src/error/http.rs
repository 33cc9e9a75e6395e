//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::BookingNotFound
            | Self::CustomerNotFound
            | Self::RoomNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::RoomNotVacant
            | Self::RoomNumberExists
            | Self::CustomerPhoneExists => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::Unknown | Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes() {
        assert_eq!(ErrorCode::RoomNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::BookingNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_codes() {
        assert_eq!(ErrorCode::RoomNotVacant.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::CustomerPhoneExists.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_validation_codes() {
        assert_eq!(
            ErrorCode::InvalidAdvance.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::CustomerFieldMissing.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::InvalidDays.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_system_codes() {
        assert_eq!(
            ErrorCode::StorageError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

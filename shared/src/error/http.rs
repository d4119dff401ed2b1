//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// The staff check-in UI depends on the split between 404 (unknown
    /// code), 400 (already used, not retryable) and 409 (already
    /// cancelled / capacity lost to a concurrent booking).
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::ReservationNotFound
            | Self::RestaurantNotFound
            | Self::MealNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::ReservationAlreadyCancelled
            | Self::CapacityExhausted => StatusCode::CONFLICT,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::CodeSpaceExhausted => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors,
            // including "already used" which the cancel UI renders as a
            // distinct, non-retryable failure)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

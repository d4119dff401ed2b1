use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Reservation engine errors
///
/// All of these are expected, recoverable outcomes surfaced to the
/// caller with a stable error code; none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Reservation not found: {0}")]
    NotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(i64),

    #[error("Reservation already used: {0}")]
    AlreadyUsed(String),

    #[error("Reservation already cancelled: {0}")]
    AlreadyCancelled(String),

    #[error("No seats left for meal {meal_id}")]
    CapacityExhausted { meal_id: i64 },

    #[error("Invalid party size: {0}")]
    InvalidPartySize(u32),

    #[error("Reservation code is empty")]
    EmptyCode,

    #[error("Reservation code already exists: {0}")]
    CodeExists(String),

    #[error("Could not issue a unique code after {0} attempts")]
    CodeSpaceExhausted(u32),
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        let message = err.to_string();
        match err {
            ReservationError::NotFound(code) => {
                AppError::with_message(ErrorCode::ReservationNotFound, message)
                    .with_detail("code", code)
            }
            ReservationError::MealNotFound(meal_id) => {
                AppError::with_message(ErrorCode::MealNotFound, message)
                    .with_detail("mealId", meal_id)
            }
            ReservationError::AlreadyUsed(code) => {
                AppError::with_message(ErrorCode::ReservationAlreadyUsed, message)
                    .with_detail("code", code)
            }
            ReservationError::AlreadyCancelled(code) => {
                AppError::with_message(ErrorCode::ReservationAlreadyCancelled, message)
                    .with_detail("code", code)
            }
            ReservationError::CapacityExhausted { meal_id } => {
                AppError::with_message(ErrorCode::CapacityExhausted, message)
                    .with_detail("mealId", meal_id)
            }
            ReservationError::InvalidPartySize(size) => {
                AppError::with_message(ErrorCode::InvalidPartySize, message)
                    .with_detail("partySize", size)
            }
            ReservationError::EmptyCode => {
                AppError::with_message(ErrorCode::InvalidReservationCode, message)
            }
            // A store collision escaping the manager's retry loop means
            // the engine itself is wedged, not the request.
            ReservationError::CodeExists(_) | ReservationError::CodeSpaceExhausted(_) => {
                AppError::with_message(ErrorCode::CodeSpaceExhausted, message)
            }
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;

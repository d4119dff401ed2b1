//! Reservation Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// `Confirmed` is the only non-terminal state. Transitions are
/// monotonic: `Confirmed -> Used` or `Confirmed -> Cancelled`, nothing
/// ever leaves `Used` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Used,
    Cancelled,
}

impl ReservationStatus {
    /// Whether this status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReservationStatus::Confirmed)
    }
}

/// Reservation record
///
/// Created only as a side effect of a successful seat allocation and
/// never deleted: cancellation and use are status transitions, so
/// history stays queryable by code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique human-typeable code, immutable once issued
    pub code: String,
    pub meal_id: i64,
    /// Denormalized for the staff per-restaurant view
    pub restaurant_id: i64,
    pub party_size: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this reservation still counts against active seating
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

/// Reservation as returned by the API, joined with meal and restaurant
/// names so the client never has to guess at the record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    /// The reservation code (kept as `token` on the wire)
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub status: ReservationStatus,
    /// Derived from `status` for older clients that only know `used`
    pub used: bool,
    pub party_size: u32,
    pub meal_id: i64,
    pub meal_name: String,
    pub meal_date: NaiveDate,
    pub restaurant_id: i64,
    pub restaurant_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(ReservationStatus::Used.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }
}

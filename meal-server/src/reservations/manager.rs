//! ReservationsManager - reservation lifecycle engine
//!
//! Orchestrates create / use / cancel over the availability ledger and
//! the reservation store, enforcing the status state machine under
//! concurrency.
//!
//! # Operation Flow
//!
//! ```text
//! create(meal_id, party)
//!     ├─ 1. Validate party size, resolve meal from catalog
//!     ├─ 2. Ledger: atomic seat check-and-claim (per-meal)
//!     ├─ 3. Issue code, insert CONFIRMED record (retry on collision)
//!     └─ 4. On any insert failure: compensating seat release
//!
//! mark_used(code) / cancel(code)
//!     ├─ 1. Normalize code, locate record
//!     ├─ 2. Guarded transition under the per-reservation entry lock
//!     │      CONFIRMED -> USED | CANCELLED, terminal states conflict
//!     └─ 3. cancel only: release seats, exactly once (the transition
//!            winner is the only caller that reaches the release)
//! ```
//!
//! Two different meals never share a lock, and two different
//! reservations never share a lock; the only cross-request contention
//! is bookings racing for the same meal's seats.

use std::sync::Arc;

use shared::models::{Reservation, ReservationStatus};

use super::code::{generate_code, normalize_code};
use super::error::{ReservationError, ReservationResult};
use super::ledger::AvailabilityLedger;
use super::store::ReservationStore;
use crate::catalog::Catalog;

/// Collision retries before giving up on code issuance. With a 32^6
/// code space this is effectively unreachable until the store holds
/// hundreds of millions of records.
const MAX_CODE_ATTEMPTS: u32 = 8;

/// Reservation lifecycle engine
///
/// Owns the ledger and the store; holds the catalog read-only for meal
/// capacity and existence checks. Tests instantiate one per case -
/// there is no ambient global state.
pub struct ReservationsManager {
    catalog: Arc<Catalog>,
    ledger: AvailabilityLedger,
    store: ReservationStore,
}

impl std::fmt::Debug for ReservationsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationsManager")
            .field("reservations", &self.store.len())
            .finish()
    }
}

impl ReservationsManager {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ledger: AvailabilityLedger::new(),
            store: ReservationStore::new(),
        }
    }

    /// Create a reservation for a meal
    ///
    /// Claims seats first, persists second. A record therefore exists
    /// only if its seats were claimed, and a claim that cannot be
    /// persisted is released before the error propagates - the ledger
    /// and the store never drift apart.
    pub fn create(&self, meal_id: i64, party_size: u32) -> ReservationResult<Reservation> {
        if party_size == 0 {
            return Err(ReservationError::InvalidPartySize(party_size));
        }

        let meal = self
            .catalog
            .get_meal(meal_id)
            .ok_or(ReservationError::MealNotFound(meal_id))?;

        // Idempotent; makes the engine self-sufficient even for meals
        // added after startup.
        self.ledger.register(meal.id, meal.capacity);
        self.ledger.try_reserve(meal.id, party_size)?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let reservation = Reservation {
                code: generate_code(),
                meal_id: meal.id,
                restaurant_id: meal.restaurant_id,
                party_size,
                status: ReservationStatus::Confirmed,
                created_at: chrono::Utc::now(),
            };
            match self.store.insert(reservation.clone()) {
                Ok(()) => {
                    tracing::info!(
                        code = %reservation.code,
                        meal_id,
                        party_size,
                        "Reservation created"
                    );
                    return Ok(reservation);
                }
                Err(ReservationError::CodeExists(code)) => {
                    tracing::warn!(%code, "Reservation code collision, redrawing");
                }
                Err(other) => {
                    self.ledger.release(meal.id, party_size);
                    return Err(other);
                }
            }
        }

        // Claimed seats must not outlive a failed create.
        self.ledger.release(meal.id, party_size);
        Err(ReservationError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS))
    }

    /// Look up a reservation by token/code, any status
    pub fn get(&self, raw_code: &str) -> ReservationResult<Reservation> {
        let code = Self::checked_code(raw_code)?;
        self.store
            .get(&code)
            .ok_or(ReservationError::NotFound(code))
    }

    /// Mark a reservation as used (staff check-in)
    ///
    /// Touches only the reservation's own status; the ledger is not
    /// involved - a consumed seat stays consumed. Exactly one of two
    /// racing calls wins, the loser observes the terminal state.
    pub fn mark_used(&self, raw_code: &str) -> ReservationResult<Reservation> {
        let code = Self::checked_code(raw_code)?;

        let result = self
            .store
            .update(&code, |r| match r.status {
                ReservationStatus::Confirmed => {
                    r.status = ReservationStatus::Used;
                    Ok(r.clone())
                }
                ReservationStatus::Used => Err(ReservationError::AlreadyUsed(r.code.clone())),
                ReservationStatus::Cancelled => {
                    Err(ReservationError::AlreadyCancelled(r.code.clone()))
                }
            })
            .ok_or(ReservationError::NotFound(code))?;

        match &result {
            Ok(reservation) => {
                tracing::info!(code = %reservation.code, "Reservation checked in")
            }
            Err(err) => tracing::warn!(%err, "Check-in rejected"),
        }
        result
    }

    /// Cancel a reservation and return its seats to the pool
    ///
    /// The release happens after the transition has committed and only
    /// in the caller that won it, so a double cancel can never release
    /// twice and a used reservation never releases at all.
    pub fn cancel(&self, raw_code: &str) -> ReservationResult<Reservation> {
        let code = Self::checked_code(raw_code)?;

        let result = self
            .store
            .update(&code, |r| match r.status {
                ReservationStatus::Confirmed => {
                    r.status = ReservationStatus::Cancelled;
                    Ok(r.clone())
                }
                ReservationStatus::Used => Err(ReservationError::AlreadyUsed(r.code.clone())),
                ReservationStatus::Cancelled => {
                    Err(ReservationError::AlreadyCancelled(r.code.clone()))
                }
            })
            .ok_or(ReservationError::NotFound(code))?;

        match &result {
            Ok(reservation) => {
                self.ledger
                    .release(reservation.meal_id, reservation.party_size);
                tracing::info!(
                    code = %reservation.code,
                    meal_id = reservation.meal_id,
                    party_size = reservation.party_size,
                    "Reservation cancelled, seats released"
                );
            }
            Err(err) => tracing::warn!(%err, "Cancel rejected"),
        }
        result
    }

    /// Reservations still counting against a restaurant's seats
    pub fn active_for_restaurant(&self, restaurant_id: i64) -> Vec<Reservation> {
        self.store.list_active_for_restaurant(restaurant_id)
    }

    /// Seats still available for a meal
    pub fn remaining_capacity(&self, meal_id: i64) -> ReservationResult<u32> {
        let meal = self
            .catalog
            .get_meal(meal_id)
            .ok_or(ReservationError::MealNotFound(meal_id))?;
        Ok(self.ledger.remaining(meal.id).unwrap_or(meal.capacity))
    }

    /// Total number of stored reservations, any status
    pub fn reservation_count(&self) -> usize {
        self.store.len()
    }

    fn checked_code(raw: &str) -> ReservationResult<String> {
        let code = normalize_code(raw);
        if code.is_empty() {
            return Err(ReservationError::EmptyCode);
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests;

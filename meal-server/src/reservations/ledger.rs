//! Availability ledger - per-meal seat accounting
//!
//! The single authority on whether a booking may be admitted. Each
//! meal has an independent entry with a fixed capacity and an atomic
//! reserved counter, so two different meals never contend on a shared
//! lock. The check-and-increment is a compare-exchange loop, which
//! makes concurrent bookings against the same meal serialize without
//! ever overshooting capacity.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use super::error::ReservationError;

/// Seat counters for one meal
#[derive(Debug)]
struct MealSeats {
    capacity: u32,
    reserved: AtomicU32,
}

/// Per-meal capacity ledger
///
/// Invariant: `0 <= reserved <= capacity` for every entry, under any
/// interleaving of `try_reserve` and `release`.
#[derive(Debug, Default)]
pub struct AvailabilityLedger {
    seats: DashMap<i64, MealSeats>,
}

impl AvailabilityLedger {
    pub fn new() -> Self {
        Self {
            seats: DashMap::new(),
        }
    }

    /// Register a meal with its fixed capacity
    ///
    /// Idempotent: re-registering an existing meal keeps its current
    /// counters untouched.
    pub fn register(&self, meal_id: i64, capacity: u32) {
        self.seats.entry(meal_id).or_insert_with(|| MealSeats {
            capacity,
            reserved: AtomicU32::new(0),
        });
    }

    /// Atomically claim `party_size` seats for a meal
    ///
    /// Succeeds only if `reserved + party_size <= capacity`; on failure
    /// nothing changes. Exactly one of two racing callers for the last
    /// seat wins.
    pub fn try_reserve(&self, meal_id: i64, party_size: u32) -> Result<(), ReservationError> {
        let entry = self
            .seats
            .get(&meal_id)
            .ok_or(ReservationError::MealNotFound(meal_id))?;

        let mut current = entry.reserved.load(Ordering::Acquire);
        loop {
            let new = current
                .checked_add(party_size)
                .ok_or(ReservationError::CapacityExhausted { meal_id })?;
            if new > entry.capacity {
                return Err(ReservationError::CapacityExhausted { meal_id });
            }
            match entry.reserved.compare_exchange_weak(
                current,
                new,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Ok(()),
                Err(observed) => current = observed,
            }
        }
    }

    /// Return `party_size` seats to the pool
    ///
    /// Called exactly once per cancelled reservation, by the single
    /// caller that won the status transition. Never underflows: a
    /// release below zero clamps and logs, since that would mean the
    /// exactly-once contract was broken upstream.
    pub fn release(&self, meal_id: i64, party_size: u32) {
        let Some(entry) = self.seats.get(&meal_id) else {
            tracing::warn!(meal_id, "release for unregistered meal ignored");
            return;
        };

        let mut current = entry.reserved.load(Ordering::Acquire);
        loop {
            let new = match current.checked_sub(party_size) {
                Some(n) => n,
                None => {
                    tracing::warn!(
                        meal_id,
                        reserved = current,
                        party_size,
                        "seat release would underflow, clamping to zero"
                    );
                    0
                }
            };
            match entry.reserved.compare_exchange_weak(
                current,
                new,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Seats still available for a meal
    pub fn remaining(&self, meal_id: i64) -> Option<u32> {
        self.seats.get(&meal_id).map(|entry| {
            let reserved = entry.reserved.load(Ordering::Acquire);
            entry.capacity.saturating_sub(reserved)
        })
    }

    /// Seats currently reserved for a meal
    pub fn reserved(&self, meal_id: i64) -> Option<u32> {
        self.seats
            .get(&meal_id)
            .map(|entry| entry.reserved.load(Ordering::Acquire))
    }
}

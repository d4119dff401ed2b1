//! Reservation store and code lookup index
//!
//! One sharded map keyed by the normalized code serves as both the
//! store and the case-insensitive lookup index: keys are uppercase by
//! construction (the issuer only draws uppercase symbols) and every
//! caller normalizes before touching the map, so the index can never
//! drift from the store.
//!
//! Records are never removed. Use and cancellation are status
//! transitions applied through [`ReservationStore::update`], which
//! runs under the map's exclusive entry guard - that guard is the
//! per-reservation mutual exclusion the lifecycle engine relies on.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::Reservation;

use super::error::ReservationError;

/// In-memory reservation table, keyed by normalized code
#[derive(Debug, Default)]
pub struct ReservationStore {
    by_code: DashMap<String, Reservation>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self {
            by_code: DashMap::new(),
        }
    }

    /// Insert a new reservation
    ///
    /// The existence check and the insert are one atomic step (vacant
    /// entry), so two racing inserts of the same code cannot both
    /// succeed - the defensive double-check against issuer races the
    /// engine depends on.
    pub fn insert(&self, reservation: Reservation) -> Result<(), ReservationError> {
        match self.by_code.entry(reservation.code.clone()) {
            Entry::Occupied(_) => Err(ReservationError::CodeExists(reservation.code)),
            Entry::Vacant(slot) => {
                slot.insert(reservation);
                Ok(())
            }
        }
    }

    /// Look up a reservation by normalized code
    pub fn get(&self, code: &str) -> Option<Reservation> {
        self.by_code.get(code).map(|r| r.clone())
    }

    /// Run a mutation under the exclusive per-entry guard
    ///
    /// Returns `None` when the code is unknown; otherwise the closure's
    /// result. Concurrent `update` calls on the same code serialize;
    /// different codes do not contend beyond their map shard.
    pub fn update<R>(
        &self,
        code: &str,
        f: impl FnOnce(&mut Reservation) -> R,
    ) -> Option<R> {
        self.by_code.get_mut(code).map(|mut entry| f(&mut entry))
    }

    /// All reservations currently counting against a restaurant's seats
    ///
    /// Iteration is a consistent per-shard snapshot; the result
    /// reflects every transition committed before the call.
    pub fn list_active_for_restaurant(&self, restaurant_id: i64) -> Vec<Reservation> {
        self.by_code
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id && r.is_active())
            .map(|r| r.clone())
            .collect()
    }

    /// Total number of stored reservations, any status
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::ReservationStatus;

    fn reservation(code: &str, restaurant_id: i64) -> Reservation {
        Reservation {
            code: code.to_string(),
            meal_id: 10,
            restaurant_id,
            party_size: 1,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_then_get() {
        let store = ReservationStore::new();
        store.insert(reservation("XY7K2Q", 1)).unwrap();

        let found = store.get("XY7K2Q").unwrap();
        assert_eq!(found.code, "XY7K2Q");
        assert!(store.get("ZZZZZZ").is_none());
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let store = ReservationStore::new();
        store.insert(reservation("XY7K2Q", 1)).unwrap();

        assert!(matches!(
            store.insert(reservation("XY7K2Q", 1)),
            Err(ReservationError::CodeExists(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_code() {
        let store = ReservationStore::new();
        assert!(store.update("NOPE42", |_| ()).is_none());
    }

    #[test]
    fn test_active_listing_filters_status_and_restaurant() {
        let store = ReservationStore::new();
        store.insert(reservation("AAAAAA", 1)).unwrap();
        store.insert(reservation("BBBBBB", 1)).unwrap();
        store.insert(reservation("CCCCCC", 2)).unwrap();

        store.update("BBBBBB", |r| r.status = ReservationStatus::Used);

        let active = store.list_active_for_restaurant(1);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].code, "AAAAAA");
    }
}

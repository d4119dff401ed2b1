use super::*;

// ========================================================================
// Create
// ========================================================================

#[test]
fn test_create_returns_confirmed_reservation() {
    let manager = create_test_manager();

    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.meal_id, MEAL_FRANCESINHA);
    assert_eq!(reservation.restaurant_id, TASCA);
    assert_eq!(reservation.party_size, 1);
    assert_eq!(reservation.code.len(), crate::reservations::code::CODE_LEN);
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 4);
}

#[test]
fn test_create_unknown_meal() {
    let manager = create_test_manager();

    assert_eq!(
        manager.create(999, 1).unwrap_err(),
        ReservationError::MealNotFound(999)
    );
    assert_eq!(manager.reservation_count(), 0);
}

#[test]
fn test_create_rejects_zero_party_size() {
    let manager = create_test_manager();

    assert_eq!(
        manager.create(MEAL_FRANCESINHA, 0).unwrap_err(),
        ReservationError::InvalidPartySize(0)
    );
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 5);
}

#[test]
fn test_create_fails_when_capacity_exhausted() {
    let manager = create_test_manager();

    manager.create(MEAL_BACALHAU, 1).unwrap();
    assert_eq!(
        manager.create(MEAL_BACALHAU, 1).unwrap_err(),
        ReservationError::CapacityExhausted {
            meal_id: MEAL_BACALHAU
        }
    );
    // The failed create left no record behind
    assert_eq!(manager.reservation_count(), 1);
}

#[test]
fn test_create_party_larger_than_remaining() {
    let manager = create_test_manager();

    manager.create(MEAL_CATAPLANA, 2).unwrap();
    assert_eq!(
        manager.create(MEAL_CATAPLANA, 2).unwrap_err(),
        ReservationError::CapacityExhausted {
            meal_id: MEAL_CATAPLANA
        }
    );
    // A single seat still fits
    manager.create(MEAL_CATAPLANA, 1).unwrap();
    assert_eq!(manager.remaining_capacity(MEAL_CATAPLANA).unwrap(), 0);
}

// ========================================================================
// Use (check-in)
// ========================================================================

#[test]
fn test_use_transitions_to_used() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    let used = manager.mark_used(&reservation.code).unwrap();
    assert_eq!(used.status, ReservationStatus::Used);

    // Status is visible through lookup afterwards
    assert_eq!(
        manager.get(&reservation.code).unwrap().status,
        ReservationStatus::Used
    );
}

#[test]
fn test_use_twice_conflicts() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    manager.mark_used(&reservation.code).unwrap();
    assert_eq!(
        manager.mark_used(&reservation.code).unwrap_err(),
        ReservationError::AlreadyUsed(reservation.code.clone())
    );
}

#[test]
fn test_use_does_not_touch_the_ledger() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 2).unwrap();
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 3);

    manager.mark_used(&reservation.code).unwrap();
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 3);
}

#[test]
fn test_use_unknown_code() {
    let manager = create_test_manager();

    assert_eq!(
        manager.mark_used("ZZZZZZ").unwrap_err(),
        ReservationError::NotFound("ZZZZZZ".into())
    );
}

// ========================================================================
// Cancel
// ========================================================================

#[test]
fn test_cancel_restores_capacity() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 3).unwrap();
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 2);

    let cancelled = manager.cancel(&reservation.code).unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 5);
}

#[test]
fn test_cancelled_reservation_stays_queryable() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    manager.cancel(&reservation.code).unwrap();

    let found = manager.get(&reservation.code).unwrap();
    assert_eq!(found.status, ReservationStatus::Cancelled);
}

#[test]
fn test_use_after_cancel_conflicts() {
    // create -> cancel -> use attempt
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_BACALHAU, 1).unwrap();

    manager.cancel(&reservation.code).unwrap();
    assert_eq!(
        manager.mark_used(&reservation.code).unwrap_err(),
        ReservationError::AlreadyCancelled(reservation.code.clone())
    );
    // Seat returned exactly once
    assert_eq!(manager.remaining_capacity(MEAL_BACALHAU).unwrap(), 1);
}

#[test]
fn test_cancel_after_use_conflicts() {
    // create -> use -> cancel attempt; the consumed seat
    // stays consumed.
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_BACALHAU, 1).unwrap();

    manager.mark_used(&reservation.code).unwrap();
    assert_eq!(
        manager.cancel(&reservation.code).unwrap_err(),
        ReservationError::AlreadyUsed(reservation.code.clone())
    );
    assert_eq!(manager.remaining_capacity(MEAL_BACALHAU).unwrap(), 0);
}

#[test]
fn test_cancel_twice_conflicts_and_releases_once() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 2).unwrap();

    manager.cancel(&reservation.code).unwrap();
    assert_eq!(
        manager.cancel(&reservation.code).unwrap_err(),
        ReservationError::AlreadyCancelled(reservation.code.clone())
    );
    // Restored by exactly the party size, exactly once
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 5);
}

#[test]
fn test_cancel_unknown_code() {
    let manager = create_test_manager();

    assert_eq!(
        manager.cancel("ZZZZZZ").unwrap_err(),
        ReservationError::NotFound("ZZZZZZ".into())
    );
}

// ========================================================================
// Lookup and staff listing
// ========================================================================

#[test]
fn test_empty_code_is_validation_error() {
    let manager = create_test_manager();

    assert_eq!(manager.get("").unwrap_err(), ReservationError::EmptyCode);
    assert_eq!(
        manager.mark_used("   ").unwrap_err(),
        ReservationError::EmptyCode
    );
}

#[test]
fn test_active_listing_per_restaurant() {
    let manager = create_test_manager();

    let first = manager.create(MEAL_FRANCESINHA, 1).unwrap();
    let second = manager.create(MEAL_FRANCESINHA, 1).unwrap();
    manager.create(MEAL_CATAPLANA, 1).unwrap();

    assert_eq!(manager.active_for_restaurant(TASCA).len(), 2);
    assert_eq!(manager.active_for_restaurant(MARISQUEIRA).len(), 1);

    // Used and cancelled reservations drop out of the active view
    manager.mark_used(&first.code).unwrap();
    manager.cancel(&second.code).unwrap();
    assert!(manager.active_for_restaurant(TASCA).is_empty());
}

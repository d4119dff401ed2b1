use super::*;
use std::sync::Barrier;

fn race<T: Send + 'static>(
    manager: &Arc<ReservationsManager>,
    threads: usize,
    op: impl Fn(&ReservationsManager) -> T + Send + Sync + 'static,
) -> Vec<T> {
    let op = Arc::new(op);
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let manager = Arc::clone(manager);
            let barrier = Arc::clone(&barrier);
            let op = Arc::clone(&op);
            std::thread::spawn(move || {
                barrier.wait();
                op(&manager)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

// ========================================================================
// Overbooking races
// ========================================================================

#[test]
fn test_two_concurrent_creates_for_the_last_seat() {
    // Capacity 1, two simultaneous bookings
    let manager = Arc::new(create_test_manager());

    let results = race(&manager, 2, |m| m.create(MEAL_BACALHAU, 1));

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(ReservationError::CapacityExhausted { .. })))
    );
    assert_eq!(manager.remaining_capacity(MEAL_BACALHAU).unwrap(), 0);
}

#[test]
fn test_no_overbooking_under_heavy_contention() {
    // N = 40 bookings against K = 5 seats: exactly K succeed
    let manager = Arc::new(create_test_manager());

    let results = race(&manager, 40, |m| m.create(MEAL_FRANCESINHA, 1));

    let wins = results.iter().filter(|r| r.is_ok()).count();
    let full = results
        .iter()
        .filter(|r| matches!(r, Err(ReservationError::CapacityExhausted { .. })))
        .count();

    assert_eq!(wins, 5);
    assert_eq!(full, 35);
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 0);
    assert_eq!(manager.reservation_count(), 5);
}

#[test]
fn test_concurrent_creates_issue_unique_codes() {
    let manager = Arc::new(create_test_manager());

    let results = race(&manager, 5, |m| m.create(MEAL_FRANCESINHA, 1));

    let codes: std::collections::HashSet<_> =
        results.into_iter().map(|r| r.unwrap().code).collect();
    assert_eq!(codes.len(), 5);
}

// ========================================================================
// Status transition races
// ========================================================================

#[test]
fn test_concurrent_use_has_a_single_winner() {
    // Two staff terminals check in the same code at once
    let manager = Arc::new(create_test_manager());
    let code = manager.create(MEAL_FRANCESINHA, 1).unwrap().code;

    let op_code = code.clone();
    let results = race(&manager, 2, move |m| m.mark_used(&op_code));

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(ReservationError::AlreadyUsed(_))))
    );
    assert_eq!(manager.get(&code).unwrap().status, ReservationStatus::Used);
}

#[test]
fn test_concurrent_cancel_releases_exactly_once() {
    let manager = Arc::new(create_test_manager());
    let code = manager.create(MEAL_FRANCESINHA, 2).unwrap().code;
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 3);

    let op_code = code.clone();
    let results = race(&manager, 2, move |m| m.cancel(&op_code));

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    // Restored by the party size exactly once, not twice
    assert_eq!(manager.remaining_capacity(MEAL_FRANCESINHA).unwrap(), 5);
}

#[test]
fn test_racing_use_and_cancel_are_mutually_exclusive() {
    let manager = Arc::new(create_test_manager());
    let code = manager.create(MEAL_FRANCESINHA, 1).unwrap().code;

    let barrier = Arc::new(Barrier::new(2));

    let use_handle = {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        let code = code.clone();
        std::thread::spawn(move || {
            barrier.wait();
            manager.mark_used(&code)
        })
    };
    let cancel_handle = {
        let manager = Arc::clone(&manager);
        let barrier = Arc::clone(&barrier);
        let code = code.clone();
        std::thread::spawn(move || {
            barrier.wait();
            manager.cancel(&code)
        })
    };

    let used = use_handle.join().unwrap();
    let cancelled = cancel_handle.join().unwrap();

    // Exactly one side wins, and the ledger agrees with the winner
    assert!(used.is_ok() ^ cancelled.is_ok());
    let final_status = manager.get(&code).unwrap().status;
    let remaining = manager.remaining_capacity(MEAL_FRANCESINHA).unwrap();
    match final_status {
        ReservationStatus::Used => assert_eq!(remaining, 4),
        ReservationStatus::Cancelled => assert_eq!(remaining, 5),
        ReservationStatus::Confirmed => panic!("race left the reservation untouched"),
    }
}

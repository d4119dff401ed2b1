use super::*;
use std::collections::HashSet;

#[test]
fn test_lookup_is_case_insensitive() {
    // Staff types the code lowercase
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    let lower = reservation.code.to_ascii_lowercase();
    let mut mixed = String::new();
    for (i, c) in reservation.code.chars().enumerate() {
        if i % 2 == 0 {
            mixed.extend(c.to_lowercase());
        } else {
            mixed.push(c);
        }
    }

    for variant in [reservation.code.as_str(), &lower, &mixed] {
        assert_eq!(manager.get(variant).unwrap().code, reservation.code);
    }
}

#[test]
fn test_use_by_lowercase_code() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    let used = manager
        .mark_used(&reservation.code.to_ascii_lowercase())
        .unwrap();
    assert_eq!(used.status, ReservationStatus::Used);
}

#[test]
fn test_lookup_tolerates_surrounding_whitespace() {
    let manager = create_test_manager();
    let reservation = manager.create(MEAL_FRANCESINHA, 1).unwrap();

    let padded = format!("  {}  ", reservation.code);
    assert_eq!(manager.get(&padded).unwrap().code, reservation.code);
}

#[test]
fn test_issued_codes_are_unique() {
    let manager = create_test_manager();

    let mut codes = HashSet::new();
    for _ in 0..5 {
        let r = manager.create(MEAL_FRANCESINHA, 1).unwrap();
        assert!(codes.insert(r.code.clone()), "duplicate code issued");
        manager.cancel(&r.code).unwrap();
    }
}

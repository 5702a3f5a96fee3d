//! Tests for workshop-model: draft validation, the repair lifecycle and
//! the store's update operations.

use chrono::NaiveDate;
use workshop_model::{
    DraftError, FixedClock, RepairStatus, SequentialIds, StatusCounts, StoreError, VehicleDraft,
    WorkshopStore,
};

fn store() -> WorkshopStore {
    WorkshopStore::seeded(
        Box::new(SequentialIds::new()),
        Box::new(FixedClock(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())),
    )
}

fn draft_with_parts(names: &[&str]) -> VehicleDraft {
    let mut draft = VehicleDraft::new(2022);
    draft.make = "Mazda".to_string();
    draft.model = "3".to_string();
    draft.license_plate = "MZD-003".to_string();
    draft.customer_name = "Robin Diaz".to_string();

    let first = draft.parts()[0].row;
    if let Some((head, rest)) = names.split_first() {
        draft.set_part_name(first, *head);
        for name in rest {
            let row = draft.add_part();
            draft.set_part_name(row, *name);
        }
    }
    draft
}

#[test]
fn submit_keeps_only_trimmed_named_parts() {
    let draft = draft_with_parts(&["  Brake Pads ", "   ", "Wiper Blades"]);
    let submission = draft.finish().expect("two named parts");

    let names: Vec<&str> = submission.parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Brake Pads", "Wiper Blades"]);
    assert_eq!(submission.status, RepairStatus::Waiting);
}

#[test]
fn submit_with_only_blank_parts_is_rejected() {
    let draft = draft_with_parts(&["   "]);
    assert_eq!(draft.finish(), Err(DraftError::NoNamedParts));

    // Nothing reaches the store either.
    let mut store = store();
    let before = store.len();
    if let Ok(submission) = draft.finish() {
        store.register(submission);
    }
    assert_eq!(store.len(), before);
}

#[test]
fn registered_vehicle_shows_up_in_counts_and_search() {
    let mut store = store();
    let id = store.register(draft_with_parts(&["Timing Belt"]).finish().unwrap());

    assert_eq!(
        store.counts(),
        StatusCounts {
            total: 3,
            waiting: 2,
            in_progress: 1,
            completed: 0,
        }
    );
    let hits = store.matching("robin");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);
}

#[test]
fn seed_summary_counts() {
    assert_eq!(
        store().counts(),
        StatusCounts {
            total: 2,
            waiting: 1,
            in_progress: 1,
            completed: 0,
        }
    );
}

#[test]
fn search_civic_any_case_returns_only_the_honda() {
    let store = store();
    for query in ["civic", "CIVIC", "cIvIc"] {
        let hits = store.matching(query);
        assert_eq!(hits.len(), 1, "query {query:?}");
        assert_eq!(hits[0].make, "Honda");
    }
}

#[test]
fn full_lifecycle_waiting_to_completed() {
    let mut store = store();
    let camry = store.vehicles()[0].id.clone();
    let air_filter = store.vehicles()[0].parts[2].id.clone();

    // Waiting with a missing part: no next status, advance rejected.
    assert_eq!(store.get(&camry).unwrap().next_status(), None);
    assert!(store.advance_status(&camry, RepairStatus::InProgress).is_err());

    // Part arrives: repair can start.
    store.toggle_part(&camry, &air_filter).unwrap();
    let next = store.get(&camry).unwrap().next_status().unwrap();
    assert_eq!(next, RepairStatus::InProgress);
    store.advance_status(&camry, next).unwrap();

    // In progress always completes.
    let next = store.get(&camry).unwrap().next_status().unwrap();
    assert_eq!(next, RepairStatus::Completed);
    store.advance_status(&camry, next).unwrap();

    // Completed is terminal.
    assert_eq!(store.get(&camry).unwrap().next_status(), None);
    assert!(matches!(
        store.advance_status(&camry, RepairStatus::Waiting),
        Err(StoreError::InvalidTransition { .. })
    ));
}

#[test]
fn toggling_one_part_leaves_other_vehicles_untouched() {
    let mut store = store();
    let snapshot: Vec<_> = store.vehicles().to_vec();
    let civic = snapshot[1].id.clone();
    let spark_plugs = snapshot[1].parts[0].id.clone();

    store.toggle_part(&civic, &spark_plugs).unwrap();

    assert_eq!(store.vehicles()[0], snapshot[0]);
    assert!(!store.vehicles()[1].parts[0].available);
    assert_eq!(store.vehicles()[1].parts[1], snapshot[1].parts[1]);
    // Pre-mutation snapshot is unaffected.
    assert!(snapshot[1].parts[0].available);
}

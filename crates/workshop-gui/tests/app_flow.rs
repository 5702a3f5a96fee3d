//! Tests for application state: card intents and the add-form flow.

use chrono::NaiveDate;
use workshop_gui::state::{AddFormState, AppState};
use workshop_gui::views::CardAction;
use workshop_model::{FixedClock, RepairStatus, SequentialIds, VehicleDraft, WorkshopStore};

fn app() -> AppState {
    AppState::new(WorkshopStore::seeded(
        Box::new(SequentialIds::new()),
        Box::new(FixedClock(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())),
    ))
}

#[test]
fn card_actions_drive_the_store() {
    let mut state = app();
    let camry = state.store.vehicles()[0].id.clone();
    let air_filter = state.store.vehicles()[0].parts[2].id.clone();

    state.apply(CardAction::TogglePart {
        vehicle: camry.clone(),
        part: air_filter,
    });
    assert!(state.store.vehicles()[0].all_parts_available());

    state.apply(CardAction::Advance {
        vehicle: camry.clone(),
        to: RepairStatus::InProgress,
    });
    assert_eq!(
        state.store.get(&camry).unwrap().status,
        RepairStatus::InProgress
    );
}

#[test]
fn rejected_card_action_leaves_state_unchanged() {
    let mut state = app();
    let camry = state.store.vehicles()[0].id.clone();

    // Air Filter still unavailable: the advance is dropped.
    state.apply(CardAction::Advance {
        vehicle: camry.clone(),
        to: RepairStatus::InProgress,
    });
    assert_eq!(state.store.get(&camry).unwrap().status, RepairStatus::Waiting);
}

#[test]
fn open_form_defaults_year_from_clock() {
    let mut state = app();
    state.open_add_form();
    let form = state.add_form.as_ref().expect("form open");
    assert_eq!(form.draft.year, 2026);
    assert_eq!(form.draft.parts().len(), 1);
}

#[test]
fn submit_records_validation_error_and_blocks() {
    let mut form = AddFormState {
        draft: VehicleDraft::new(2026),
        error: None,
    };

    // No named part yet: submit fails and the message sticks.
    assert!(form.submit().is_none());
    assert!(form.error.is_some());

    // Name a part: submit succeeds and the error clears.
    let row = form.draft.parts()[0].row;
    form.draft.set_part_name(row, "Brake Pads");
    let submission = form.submit().expect("valid draft");
    assert!(form.error.is_none());
    assert_eq!(submission.parts.len(), 1);
    assert_eq!(submission.status, RepairStatus::Waiting);
}

#[test]
fn submitted_form_registers_and_closes() {
    let mut state = app();
    state.open_add_form();

    let form = state.add_form.as_mut().expect("form open");
    form.draft.make = "Ford".to_string();
    form.draft.model = "Focus".to_string();
    form.draft.customer_name = "Avery Lee".to_string();
    form.draft.license_plate = "FOC-001".to_string();
    let row = form.draft.parts()[0].row;
    form.draft.set_part_name(row, "Clutch Kit");

    let submission = form.submit().expect("valid draft");
    let id = state.store.register(submission);
    state.close_add_form();

    assert!(state.add_form.is_none());
    let vehicle = state.store.get(&id).expect("registered");
    assert_eq!(vehicle.status, RepairStatus::Waiting);
    assert_eq!(
        vehicle.date_added,
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    );
    assert_eq!(state.store.counts().total, 3);
}

#[test]
fn cancel_discards_the_draft() {
    let mut state = app();
    state.open_add_form();
    if let Some(form) = state.add_form.as_mut() {
        form.draft.make = "Ford".to_string();
    }
    state.close_add_form();

    // Reopening starts clean.
    state.open_add_form();
    assert!(state.add_form.as_ref().unwrap().draft.make.is_empty());
    assert_eq!(state.store.counts().total, 2);
}

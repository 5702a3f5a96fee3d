//! Application-level state

use chrono::Datelike;
use workshop_model::{
    SequentialIds, SystemClock, VehicleDraft, VehicleSubmission, WorkshopStore,
};

use crate::views::CardAction;

/// Top-level application state.
///
/// The store is the single authority over the vehicle collection; views
/// borrow it for rendering and hand intents back through [`AppState::apply`].
pub struct AppState {
    /// Owned vehicle collection
    pub store: WorkshopStore,
    /// Dashboard search query
    pub search: String,
    /// Add-vehicle form, while the modal is open
    pub add_form: Option<AddFormState>,
}

/// Draft state for the add-vehicle modal.
pub struct AddFormState {
    pub draft: VehicleDraft,
    /// Last validation failure, shown inline until the next submit.
    pub error: Option<String>,
}

impl AddFormState {
    /// Try to finish the draft. On validation failure the message is
    /// recorded for inline display and nothing is emitted.
    pub fn submit(&mut self) -> Option<VehicleSubmission> {
        match self.draft.finish() {
            Ok(submission) => {
                self.error = None;
                Some(submission)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

impl AppState {
    pub fn new(store: WorkshopStore) -> Self {
        Self {
            store,
            search: String::new(),
            add_form: None,
        }
    }

    /// Runtime state for the application: seeded store, wall clock,
    /// sequential ids.
    pub fn seeded() -> Self {
        Self::new(WorkshopStore::seeded(
            Box::new(SequentialIds::new()),
            Box::new(SystemClock),
        ))
    }

    /// Open the add-vehicle modal with a fresh draft.
    pub fn open_add_form(&mut self) {
        let year = self.store.today().year();
        self.add_form = Some(AddFormState {
            draft: VehicleDraft::new(year),
            error: None,
        });
    }

    /// Discard the draft and close the modal.
    pub fn close_add_form(&mut self) {
        self.add_form = None;
    }

    /// Apply a card intent to the store.
    ///
    /// Card buttons are gated on the same derivations the store checks,
    /// so failures here mean a stale frame; they are logged and dropped.
    pub fn apply(&mut self, action: CardAction) {
        let result = match action {
            CardAction::Advance { vehicle, to } => self.store.advance_status(&vehicle, to),
            CardAction::TogglePart { vehicle, part } => self.store.toggle_part(&vehicle, &part),
        };
        if let Err(err) = result {
            tracing::error!(%err, "card action rejected by store");
        }
    }
}

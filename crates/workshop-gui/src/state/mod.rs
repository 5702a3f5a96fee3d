//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;

pub use app_state::{AddFormState, AppState};

//! View components
//!
//! Each view renders from borrowed state and reports user intents back
//! to the caller, which owns the authoritative state.

mod add_form;
mod dashboard;
mod vehicle_card;

pub use add_form::{AddVehicleForm, FormResult};
pub use dashboard::DashboardView;
pub use vehicle_card::{CardAction, VehicleCard};

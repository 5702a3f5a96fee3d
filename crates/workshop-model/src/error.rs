use thiserror::Error;

use crate::ids::{PartId, VehicleId};
use crate::vehicle::RepairStatus;

/// Validation failures raised when finishing a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Every part row had a blank name after trimming.
    #[error("add at least one named part")]
    NoNamedParts,
}

/// Failures raised by store update operations.
///
/// The GUI gates its buttons on the same derivations the store checks,
/// so these normally only surface through direct API use (and tests).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no vehicle with id {0}")]
    UnknownVehicle(VehicleId),

    #[error("vehicle {vehicle} has no part {part}")]
    UnknownPart { vehicle: VehicleId, part: PartId },

    /// The requested status is not the legal next step. Status never
    /// moves backwards and never skips a stage.
    #[error("cannot move vehicle {vehicle} from {from} to {to}")]
    InvalidTransition {
        vehicle: VehicleId,
        from: RepairStatus,
        to: RepairStatus,
    },

    /// Repair cannot start while any part is unavailable.
    #[error("cannot start repair on vehicle {0}: some parts are not available")]
    PartsMissing(VehicleId),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub mod draft;
pub mod error;
pub mod ids;
pub mod store;
pub mod vehicle;

pub use draft::{DraftPart, SubmittedPart, VehicleDraft, VehicleSubmission};
pub use error::{DraftError, Result, StoreError};
pub use ids::{Clock, FixedClock, IdSource, PartId, SequentialIds, SystemClock, VehicleId};
pub use store::{StatusCounts, WorkshopStore};
pub use vehicle::{Part, RepairStatus, Vehicle};

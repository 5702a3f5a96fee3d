//! The owned, in-memory vehicle collection.
//!
//! [`WorkshopStore`] is the single authority over session state: views
//! receive borrowed snapshots and hand intents back as method calls.
//! Mutation happens only through the typed update operations here, which
//! rebuild the affected records in place behind `&mut self`; callers that
//! cloned a snapshot beforehand never observe the change.

use chrono::NaiveDate;

use crate::draft::VehicleSubmission;
use crate::error::{Result, StoreError};
use crate::ids::{Clock, IdSource, PartId, VehicleId};
use crate::vehicle::{Part, RepairStatus, Vehicle};

/// Aggregate counts for the dashboard summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub waiting: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Owns the authoritative vehicle list plus the injected id and date
/// capabilities used when registering new vehicles.
pub struct WorkshopStore {
    vehicles: Vec<Vehicle>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl WorkshopStore {
    /// An empty store.
    pub fn new(ids: Box<dyn IdSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            vehicles: Vec::new(),
            ids,
            clock,
        }
    }

    /// A store preloaded with the fixed demo workshop: one car waiting on
    /// a part and one already under repair.
    pub fn seeded(ids: Box<dyn IdSource>, clock: Box<dyn Clock>) -> Self {
        let mut store = Self::new(ids, clock);
        store.seed();
        store
    }

    fn seed(&mut self) {
        let camry = Vehicle {
            id: self.ids.next_vehicle_id(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2020,
            license_plate: "ABC-123".to_string(),
            customer_name: "John Smith".to_string(),
            parts: vec![
                self.seed_part("Brake Pads", true, 120.0),
                self.seed_part("Oil Filter", true, 25.0),
                self.seed_part("Air Filter", false, 40.0),
            ],
            status: RepairStatus::Waiting,
            date_added: seed_date(2024, 6, 20),
        };
        let civic = Vehicle {
            id: self.ids.next_vehicle_id(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2019,
            license_plate: "XYZ-789".to_string(),
            customer_name: "Sarah Johnson".to_string(),
            parts: vec![
                self.seed_part("Spark Plugs", true, 80.0),
                self.seed_part("Transmission Fluid", true, 60.0),
            ],
            status: RepairStatus::InProgress,
            date_added: seed_date(2024, 6, 18),
        };
        self.vehicles.push(camry);
        self.vehicles.push(civic);
    }

    fn seed_part(&mut self, name: &str, available: bool, cost: f64) -> Part {
        Part {
            id: self.ids.next_part_id(),
            name: name.to_string(),
            available,
            cost,
        }
    }

    // ========================================================================
    // Update operations
    // ========================================================================

    /// Register a finished draft: stamp a fresh vehicle id, fresh part
    /// ids and today's date, then append to the collection.
    pub fn register(&mut self, submission: VehicleSubmission) -> VehicleId {
        let id = self.ids.next_vehicle_id();
        let parts = submission
            .parts
            .into_iter()
            .map(|part| Part {
                id: self.ids.next_part_id(),
                name: part.name,
                available: part.available,
                cost: part.cost,
            })
            .collect();

        let vehicle = Vehicle {
            id: id.clone(),
            make: submission.make,
            model: submission.model,
            year: submission.year,
            license_plate: submission.license_plate,
            customer_name: submission.customer_name,
            parts,
            status: submission.status,
            date_added: self.clock.today(),
        };
        tracing::info!(vehicle = %id, plate = %vehicle.license_plate, "registered vehicle");
        self.vehicles.push(vehicle);
        id
    }

    /// Replace the status of the matching vehicle.
    ///
    /// Only the legal next forward step is accepted: waiting →
    /// in-progress (and only with every part available), in-progress →
    /// completed. A completed vehicle never changes again.
    pub fn advance_status(&mut self, vehicle_id: &VehicleId, to: RepairStatus) -> Result<()> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|vehicle| &vehicle.id == vehicle_id)
            .ok_or_else(|| StoreError::UnknownVehicle(vehicle_id.clone()))?;

        let from = vehicle.status;
        match (from, to) {
            (RepairStatus::Waiting, RepairStatus::InProgress) => {
                if !vehicle.all_parts_available() {
                    return Err(StoreError::PartsMissing(vehicle_id.clone()));
                }
            }
            (RepairStatus::InProgress, RepairStatus::Completed) => {}
            _ => {
                return Err(StoreError::InvalidTransition {
                    vehicle: vehicle_id.clone(),
                    from,
                    to,
                });
            }
        }

        vehicle.status = to;
        tracing::info!(vehicle = %vehicle_id, %from, %to, "advanced repair status");
        Ok(())
    }

    /// Flip the availability flag of exactly one part on one vehicle.
    pub fn toggle_part(&mut self, vehicle_id: &VehicleId, part_id: &PartId) -> Result<()> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|vehicle| &vehicle.id == vehicle_id)
            .ok_or_else(|| StoreError::UnknownVehicle(vehicle_id.clone()))?;
        let part = vehicle
            .parts
            .iter_mut()
            .find(|part| &part.id == part_id)
            .ok_or_else(|| StoreError::UnknownPart {
                vehicle: vehicle_id.clone(),
                part: part_id.clone(),
            })?;

        part.available = !part.available;
        tracing::debug!(
            vehicle = %vehicle_id,
            part = %part_id,
            available = part.available,
            "toggled part availability"
        );
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All vehicles in insertion order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, vehicle_id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| &vehicle.id == vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Today's date from the injected clock (used to default form fields).
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Case-insensitive substring filter over make, model, customer name
    /// and license plate. A blank query matches everything; insertion
    /// order is preserved.
    pub fn matching(&self, query: &str) -> Vec<&Vehicle> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.vehicles.iter().collect();
        }
        self.vehicles
            .iter()
            .filter(|vehicle| {
                vehicle.make.to_lowercase().contains(&needle)
                    || vehicle.model.to_lowercase().contains(&needle)
                    || vehicle.customer_name.to_lowercase().contains(&needle)
                    || vehicle.license_plate.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Aggregate counts per lifecycle stage.
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.vehicles.len(),
            ..StatusCounts::default()
        };
        for vehicle in &self.vehicles {
            match vehicle.status {
                RepairStatus::Waiting => counts.waiting += 1,
                RepairStatus::InProgress => counts.in_progress += 1,
                RepairStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }
}

impl std::fmt::Debug for WorkshopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkshopStore")
            .field("vehicles", &self.vehicles.len())
            .finish()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

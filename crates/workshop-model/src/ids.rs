//! Identifier newtypes and the injected creation capabilities.
//!
//! Vehicle and part ids are opaque strings minted by an [`IdSource`], and
//! creation dates come from a [`Clock`]. Both are injected into the store
//! so that creation is deterministic under test.

use std::fmt;

use chrono::NaiveDate;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PartId(String);

impl PartId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mints fresh vehicle and part identifiers.
pub trait IdSource {
    fn next_vehicle_id(&mut self) -> VehicleId;
    fn next_part_id(&mut self) -> PartId;
}

/// Default id source: `v1`, `v2`, ... and `p1`, `p2`, ...
///
/// Counters only move forward, so every id handed out is unique for the
/// lifetime of the source.
#[derive(Debug, Default)]
pub struct SequentialIds {
    vehicles: u64,
    parts: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_vehicle_id(&mut self) -> VehicleId {
        self.vehicles += 1;
        VehicleId::new(format!("v{}", self.vehicles))
    }

    fn next_part_id(&mut self) -> PartId {
        self.parts += 1;
        PartId::new(format!("p{}", self.parts))
    }
}

/// Supplies the current date for `date_added` stamping.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates for the running application.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

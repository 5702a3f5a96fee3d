//! Vehicle and part records plus the repair-status lifecycle.
//!
//! A [`Vehicle`] is one customer car under repair tracking. Its status
//! only ever moves forward: waiting → in-progress → completed, and the
//! in-progress stage is reachable only once every required part is
//! available.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{PartId, VehicleId};

/// A required component for a repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub available: bool,
    /// Non-negative cost in whole currency units.
    pub cost: f64,
}

/// Repair lifecycle stage.
///
/// Serialized with the kebab-case spellings used throughout
/// (`waiting`, `in-progress`, `completed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairStatus {
    Waiting,
    InProgress,
    Completed,
}

impl RepairStatus {
    /// Canonical wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Waiting => "waiting",
            RepairStatus::InProgress => "in-progress",
            RepairStatus::Completed => "completed",
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            RepairStatus::Waiting => "Waiting for Parts",
            RepairStatus::InProgress => "Under Repair",
            RepairStatus::Completed => "Completed",
        }
    }

    /// All stages in lifecycle order.
    pub fn all() -> &'static [RepairStatus] {
        &[
            Self::Waiting,
            Self::InProgress,
            Self::Completed,
        ]
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RepairStatus {
    type Err = String;

    /// Parse a status spelling (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "waiting" => Ok(RepairStatus::Waiting),
            "in-progress" => Ok(RepairStatus::InProgress),
            "completed" => Ok(RepairStatus::Completed),
            _ => Err(format!("Unknown repair status: {s}")),
        }
    }
}

/// One customer car under repair tracking.
///
/// `id` and `date_added` are stamped by the store at registration and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub customer_name: String,
    pub parts: Vec<Part>,
    pub status: RepairStatus,
    pub date_added: NaiveDate,
}

impl Vehicle {
    /// True when every required part is in stock.
    pub fn all_parts_available(&self) -> bool {
        self.parts.iter().all(|part| part.available)
    }

    /// Repair may start: still waiting and nothing is missing.
    pub fn can_start_repair(&self) -> bool {
        self.all_parts_available() && self.status == RepairStatus::Waiting
    }

    /// Repair may be marked complete.
    pub fn can_complete(&self) -> bool {
        self.status == RepairStatus::InProgress
    }

    /// Sum of part costs.
    pub fn total_cost(&self) -> f64 {
        self.parts.iter().map(|part| part.cost).sum()
    }

    /// The next lifecycle stage, if one is reachable right now.
    ///
    /// Waiting advances only when repair is eligible to start; a
    /// completed vehicle has nowhere left to go.
    pub fn next_status(&self) -> Option<RepairStatus> {
        match self.status {
            RepairStatus::Waiting if self.can_start_repair() => Some(RepairStatus::InProgress),
            RepairStatus::InProgress => Some(RepairStatus::Completed),
            _ => None,
        }
    }

    /// Text for the card's action button, if an action exists.
    pub fn action_label(&self) -> Option<&'static str> {
        match self.status {
            RepairStatus::Waiting => Some("Start Repair"),
            RepairStatus::InProgress => Some("Mark Complete"),
            RepairStatus::Completed => None,
        }
    }

    /// "2020 Toyota Camry" style display title.
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

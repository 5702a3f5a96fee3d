//! Entry editor state: the in-progress vehicle draft.
//!
//! The draft owns every field the form edits, including a parts list that
//! always keeps at least one row on screen. Cancelling is just dropping
//! the draft. Finishing validates the parts and packages everything as a
//! [`VehicleSubmission`]; id and date stamping stay with the store.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;
use crate::vehicle::RepairStatus;

/// One editable part row in the form.
///
/// `row` is a draft-local ordinal used to address the row while editing;
/// real part ids are minted by the store at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPart {
    pub row: u64,
    pub name: String,
    pub available: bool,
    pub cost: f64,
}

impl DraftPart {
    fn blank(row: u64) -> Self {
        Self {
            row,
            name: String::new(),
            available: false,
            cost: 0.0,
        }
    }
}

/// A finished draft, ready for the store to register.
///
/// Status is always forced back to [`RepairStatus::Waiting`] regardless
/// of what the part rows claimed while editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSubmission {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub customer_name: String,
    pub parts: Vec<SubmittedPart>,
    pub status: RepairStatus,
}

/// A validated part from a finished draft (trimmed, non-blank name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedPart {
    pub name: String,
    pub available: bool,
    pub cost: f64,
}

/// Local draft state for the add-vehicle form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub customer_name: String,
    parts: Vec<DraftPart>,
    next_row: u64,
}

impl VehicleDraft {
    /// Create an empty draft defaulting the year field.
    pub fn new(default_year: i32) -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: default_year,
            license_plate: String::new(),
            customer_name: String::new(),
            parts: vec![DraftPart::blank(1)],
            next_row: 2,
        }
    }

    pub fn parts(&self) -> &[DraftPart] {
        &self.parts
    }

    /// Mutable access for the immediate-mode form widgets.
    pub fn parts_mut(&mut self) -> &mut [DraftPart] {
        &mut self.parts
    }

    /// Append a blank part row (unavailable, zero cost).
    pub fn add_part(&mut self) -> u64 {
        let row = self.next_row;
        self.next_row += 1;
        self.parts.push(DraftPart::blank(row));
        row
    }

    /// Remove a part row. Refused while only one row remains, so the form
    /// never shows an empty parts section.
    pub fn remove_part(&mut self, row: u64) -> bool {
        if self.parts.len() <= 1 {
            return false;
        }
        let before = self.parts.len();
        self.parts.retain(|part| part.row != row);
        self.parts.len() < before
    }

    pub fn set_part_name(&mut self, row: u64, name: impl Into<String>) {
        if let Some(part) = self.part_mut(row) {
            part.name = name.into();
        }
    }

    pub fn set_part_cost(&mut self, row: u64, cost: f64) {
        if let Some(part) = self.part_mut(row) {
            part.cost = cost.max(0.0);
        }
    }

    pub fn set_part_available(&mut self, row: u64, available: bool) {
        if let Some(part) = self.part_mut(row) {
            part.available = available;
        }
    }

    fn part_mut(&mut self, row: u64) -> Option<&mut DraftPart> {
        self.parts.iter_mut().find(|part| part.row == row)
    }

    /// Validate and package the draft.
    ///
    /// Rows whose name is blank after trimming are dropped; if nothing
    /// survives the draft is rejected and no vehicle is emitted. The
    /// draft itself is left untouched so the user can correct it.
    pub fn finish(&self) -> Result<VehicleSubmission, DraftError> {
        let parts: Vec<SubmittedPart> = self
            .parts
            .iter()
            .filter(|part| !part.name.trim().is_empty())
            .map(|part| SubmittedPart {
                name: part.name.trim().to_string(),
                available: part.available,
                cost: part.cost.max(0.0),
            })
            .collect();

        if parts.is_empty() {
            return Err(DraftError::NoNamedParts);
        }

        Ok(VehicleSubmission {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            license_plate: self.license_plate.trim().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            parts,
            status: RepairStatus::Waiting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_starts_with_one_blank_row() {
        let draft = VehicleDraft::new(2026);
        assert_eq!(draft.parts().len(), 1);
        assert!(!draft.parts()[0].available);
        assert_eq!(draft.parts()[0].cost, 0.0);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut draft = VehicleDraft::new(2026);
        let only = draft.parts()[0].row;
        assert!(!draft.remove_part(only));
        assert_eq!(draft.parts().len(), 1);

        let second = draft.add_part();
        assert!(draft.remove_part(second));
        assert_eq!(draft.parts().len(), 1);
    }

    #[test]
    fn finish_drops_blank_rows_and_forces_waiting() {
        let mut draft = VehicleDraft::new(2026);
        let first = draft.parts()[0].row;
        draft.set_part_name(first, "  Brake Pads  ");
        draft.set_part_cost(first, 120.0);
        draft.set_part_available(first, true);
        draft.add_part(); // left blank, should be dropped

        let submission = draft.finish().expect("one named part");
        assert_eq!(submission.parts.len(), 1);
        assert_eq!(submission.parts[0].name, "Brake Pads");
        assert!(submission.parts[0].available);
        assert_eq!(submission.status, RepairStatus::Waiting);
    }

    #[test]
    fn finish_rejects_all_blank_parts() {
        let mut draft = VehicleDraft::new(2026);
        draft.add_part();
        draft.set_part_name(draft.parts()[1].row, "   ");

        assert_eq!(draft.finish(), Err(DraftError::NoNamedParts));
    }

    #[test]
    fn negative_cost_is_clamped() {
        let mut draft = VehicleDraft::new(2026);
        let row = draft.parts()[0].row;
        draft.set_part_name(row, "Oil Filter");
        draft.set_part_cost(row, -5.0);

        let submission = draft.finish().expect("named part");
        assert_eq!(submission.parts[0].cost, 0.0);
    }
}

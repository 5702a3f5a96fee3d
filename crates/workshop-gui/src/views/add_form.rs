//! Add-vehicle modal form
//!
//! Edits the draft owned by [`AddFormState`]; validation happens in the
//! model when the user submits. The window only reports a result; the
//! app decides what to do with it.

use egui::RichText;
use workshop_model::VehicleSubmission;

use crate::state::AddFormState;
use crate::theme::{colors, spacing};

/// Result of showing the add-vehicle window for one frame.
#[derive(Debug)]
pub enum FormResult {
    /// Keep the window open.
    Open,
    /// A valid draft was submitted.
    Submitted(VehicleSubmission),
    /// Discard the draft and close.
    Cancelled,
}

/// Add-vehicle modal form
pub struct AddVehicleForm;

impl AddVehicleForm {
    /// Render the modal window over the current frame.
    pub fn show(ctx: &egui::Context, form: &mut AddFormState) -> FormResult {
        let mut result = FormResult::Open;
        let mut open = true;

        egui::Window::new("Add New Vehicle")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(460.0)
            .open(&mut open)
            .show(ctx, |ui| {
                Self::vehicle_fields(ui, form);
                ui.add_space(spacing::MD);
                Self::part_rows(ui, form);

                if let Some(error) = &form.error {
                    ui.add_space(spacing::SM);
                    ui.label(RichText::new(error.clone()).color(colors::DANGER));
                }

                ui.add_space(spacing::MD);
                ui.horizontal(|ui| {
                    if ui
                        .button(format!("{} Add Vehicle", egui_phosphor::regular::PLUS))
                        .clicked()
                    {
                        if let Some(submission) = form.submit() {
                            result = FormResult::Submitted(submission);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        result = FormResult::Cancelled;
                    }
                });
            });

        if !open {
            return FormResult::Cancelled;
        }
        result
    }

    fn vehicle_fields(ui: &mut egui::Ui, form: &mut AddFormState) {
        ui.label(RichText::new("Vehicle Information").strong());
        ui.add_space(spacing::SM);

        let draft = &mut form.draft;
        egui::Grid::new("vehicle_fields")
            .num_columns(2)
            .spacing([spacing::MD, spacing::SM])
            .show(ui, |ui| {
                ui.label("Make");
                ui.text_edit_singleline(&mut draft.make);
                ui.end_row();

                ui.label("Model");
                ui.text_edit_singleline(&mut draft.model);
                ui.end_row();

                ui.label("Year");
                ui.add(
                    egui::DragValue::new(&mut draft.year)
                        .range(1900..=2100)
                        .speed(0.2),
                );
                ui.end_row();

                ui.label("License Plate");
                ui.text_edit_singleline(&mut draft.license_plate);
                ui.end_row();

                ui.label("Customer Name");
                ui.text_edit_singleline(&mut draft.customer_name);
                ui.end_row();
            });
    }

    fn part_rows(ui: &mut egui::Ui, form: &mut AddFormState) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Required Parts").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Add Part", egui_phosphor::regular::PLUS))
                    .clicked()
                {
                    form.draft.add_part();
                }
            });
        });
        ui.add_space(spacing::SM);

        // A lone row cannot be removed; the form always shows one.
        let removable = form.draft.parts().len() > 1;
        let mut remove = None;

        for part in form.draft.parts_mut() {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut part.name)
                        .hint_text("e.g., Brake Pads")
                        .desired_width(180.0),
                );
                ui.add(
                    egui::DragValue::new(&mut part.cost)
                        .range(0.0..=100_000.0)
                        .prefix("$")
                        .speed(1.0),
                );
                ui.checkbox(&mut part.available, "Available");

                if removable
                    && ui
                        .button(RichText::new(egui_phosphor::regular::TRASH).color(colors::DANGER))
                        .clicked()
                {
                    remove = Some(part.row);
                }
            });
        }

        if let Some(row) = remove {
            form.draft.remove_part(row);
        }
    }
}

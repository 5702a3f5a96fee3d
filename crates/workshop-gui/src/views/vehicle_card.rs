//! Vehicle card view
//!
//! One card per vehicle: status badge, parts list with availability
//! toggles, total cost, and the status-advance button. The card renders
//! purely from the borrowed vehicle and reports clicks as a
//! [`CardAction`] for the owner to apply.

use egui::{RichText, Ui};
use workshop_model::{PartId, RepairStatus, Vehicle, VehicleId};

use crate::theme::{colors, spacing, status_color};

/// Intent raised by a card click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Advance the vehicle to the given (already validated) next status.
    Advance {
        vehicle: VehicleId,
        to: RepairStatus,
    },
    /// Flip one part's availability flag.
    TogglePart { vehicle: VehicleId, part: PartId },
}

/// Vehicle card view
pub struct VehicleCard;

impl VehicleCard {
    /// Render one vehicle card. Returns the action clicked this frame,
    /// if any.
    pub fn show(ui: &mut Ui, vehicle: &Vehicle) -> Option<CardAction> {
        let mut action = None;

        ui.group(|ui| {
            ui.set_width(ui.available_width());

            // Title row with status badge
            ui.horizontal(|ui| {
                ui.label(RichText::new(vehicle.title()).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            status_icon(vehicle.status),
                            vehicle.status.label()
                        ))
                        .color(status_color(vehicle.status))
                        .small(),
                    );
                });
            });

            ui.label(
                RichText::new(format!(
                    "{} {}",
                    egui_phosphor::regular::USER,
                    vehicle.customer_name
                ))
                .weak()
                .small(),
            );
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    egui_phosphor::regular::CAR,
                    vehicle.license_plate
                ))
                .weak()
                .small(),
            );
            ui.label(
                RichText::new(format!(
                    "{} Added: {}",
                    egui_phosphor::regular::CALENDAR,
                    vehicle.date_added
                ))
                .weak()
                .small(),
            );

            ui.add_space(spacing::SM);
            ui.separator();

            // Parts list
            ui.label(RichText::new("Required Parts").strong());
            ui.add_space(spacing::XS);
            for part in &vehicle.parts {
                ui.horizontal(|ui| {
                    let (icon, color) = if part.available {
                        (egui_phosphor::regular::CHECK_CIRCLE, colors::SUCCESS)
                    } else {
                        (egui_phosphor::regular::X_CIRCLE, colors::DANGER)
                    };
                    let toggle = ui
                        .add(egui::Label::new(RichText::new(icon).color(color)).sense(egui::Sense::click()))
                        .on_hover_text("Toggle availability");
                    if toggle.clicked() {
                        action = Some(CardAction::TogglePart {
                            vehicle: vehicle.id.clone(),
                            part: part.id.clone(),
                        });
                    }

                    if part.available {
                        ui.label(&part.name);
                    } else {
                        ui.label(RichText::new(&part.name).weak());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("${:.0}", part.cost)).weak().small());
                    });
                });
            }

            ui.add_space(spacing::SM);

            // Total cost
            ui.horizontal(|ui| {
                ui.label(RichText::new("Total Cost:").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {:.0}",
                            egui_phosphor::regular::CURRENCY_DOLLAR,
                            vehicle.total_cost()
                        ))
                        .strong(),
                    );
                });
            });

            // Action button; hidden entirely once completed
            if let Some(label) = vehicle.action_label() {
                ui.add_space(spacing::SM);
                let next = vehicle.next_status();
                ui.vertical_centered_justified(|ui| {
                    let button = ui.add_enabled(
                        next.is_some(),
                        egui::Button::new(format!("{} {label}", egui_phosphor::regular::WRENCH)),
                    );
                    if button.clicked() {
                        if let Some(to) = next {
                            action = Some(CardAction::Advance {
                                vehicle: vehicle.id.clone(),
                                to,
                            });
                        }
                    }
                });

                if vehicle.status == RepairStatus::Waiting && !vehicle.can_start_repair() {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Cannot start repair - some parts are not available")
                                .color(colors::DANGER)
                                .small(),
                        );
                    });
                }
            }
        });

        action
    }
}

fn status_icon(status: RepairStatus) -> &'static str {
    match status {
        RepairStatus::Waiting => egui_phosphor::regular::CLOCK,
        RepairStatus::InProgress => egui_phosphor::regular::WRENCH,
        RepairStatus::Completed => egui_phosphor::regular::CHECK_CIRCLE,
    }
}

//! Dashboard view
//!
//! Header, summary counts, search and the vehicle card grid.

use egui::{RichText, Ui};
use workshop_model::StatusCounts;

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::{CardAction, VehicleCard};

/// Dashboard view
pub struct DashboardView;

impl DashboardView {
    /// Render the dashboard.
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let mut open_form = false;
        let mut actions: Vec<CardAction> = Vec::new();

        // Header
        ui.horizontal(|ui| {
            ui.heading(format!(
                "{} Workshop Parts Monitor",
                egui_phosphor::regular::CAR
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Add Vehicle", egui_phosphor::regular::PLUS))
                    .clicked()
                {
                    open_form = true;
                }
            });
        });

        ui.add_space(spacing::MD);

        // Summary counts
        let counts = state.store.counts();
        Self::show_stats(ui, counts);

        ui.add_space(spacing::MD);

        // Search
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text(format!(
                    "{} Search by make, model, customer name, or license plate...",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                ))
                .desired_width(f32::INFINITY),
        );

        ui.add_space(spacing::MD);

        // Card grid
        let filtered = state.store.matching(&state.search);
        if filtered.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::XL);
                ui.label(
                    RichText::new(egui_phosphor::regular::CAR)
                        .size(40.0)
                        .weak(),
                );
                ui.label(RichText::new("No vehicles found").strong());
                let hint = if state.search.trim().is_empty() {
                    "Get started by adding a new vehicle."
                } else {
                    "Try adjusting your search terms."
                };
                ui.label(RichText::new(hint).weak().small());
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for pair in filtered.chunks(2) {
                    ui.columns(2, |cols| {
                        for (col, vehicle) in cols.iter_mut().zip(pair.iter().copied()) {
                            if let Some(action) = VehicleCard::show(col, vehicle) {
                                actions.push(action);
                            }
                        }
                    });
                    ui.add_space(spacing::SM);
                }
            });
        }

        // Handle intents after borrowing ends
        for action in actions {
            state.apply(action);
        }
        if open_form {
            state.open_add_form();
        }
    }

    /// The four summary cards across the top.
    fn show_stats(ui: &mut Ui, counts: StatusCounts) {
        let stats = [
            (
                egui_phosphor::regular::CAR,
                "Total Vehicles",
                counts.total,
                ui.visuals().strong_text_color(),
            ),
            (
                egui_phosphor::regular::CLOCK,
                "Waiting for Parts",
                counts.waiting,
                colors::DANGER,
            ),
            (
                egui_phosphor::regular::WRENCH,
                "In Progress",
                counts.in_progress,
                colors::WARNING,
            ),
            (
                egui_phosphor::regular::CHECK_CIRCLE,
                "Completed",
                counts.completed,
                colors::SUCCESS,
            ),
        ];

        egui_extras::StripBuilder::new(ui)
            .sizes(egui_extras::Size::remainder(), stats.len())
            .horizontal(|mut strip| {
                for (icon, label, value, color) in stats {
                    strip.cell(|ui| {
                        ui.group(|ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icon).size(22.0).color(color));
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(label).weak().small());
                                    ui.label(RichText::new(value.to_string()).strong().size(20.0));
                                });
                            });
                        });
                    });
                }
            });
    }
}

//! Main application struct and eframe::App implementation

use eframe::egui;

use crate::state::AppState;
use crate::views::{AddVehicleForm, DashboardView, FormResult};

/// Main application struct
pub struct WorkshopApp {
    state: AppState,
}

impl WorkshopApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            state: AppState::seeded(),
        }
    }
}

impl eframe::App for WorkshopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            DashboardView::show(ui, &mut self.state);
        });

        // Add-vehicle modal, while open
        if let Some(form) = &mut self.state.add_form {
            match AddVehicleForm::show(ctx, form) {
                FormResult::Open => {}
                FormResult::Submitted(submission) => {
                    self.state.store.register(submission);
                    self.state.close_add_form();
                }
                FormResult::Cancelled => {
                    self.state.close_add_form();
                }
            }
        }
    }
}

impl WorkshopApp {
    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        // Escape - discard the draft
        if escape && self.state.add_form.is_some() {
            self.state.close_add_form();
        }
    }
}

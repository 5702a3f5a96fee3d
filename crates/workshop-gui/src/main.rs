//! Workshop Parts Monitor - Desktop GUI Application
//!
//! A desktop application for tracking customer vehicles through the
//! repair lifecycle: parts on order, repair in progress, completed.

mod app;
mod state;
mod theme;
mod views;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Workshop Parts Monitor")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Workshop Parts Monitor",
        options,
        Box::new(|cc| Ok(Box::new(app::WorkshopApp::new(cc)))),
    )
}

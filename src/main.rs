//! Gess GUI
//!
//! A graphical interface for two players sharing one screen.

use gess::ui::GessApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gess=debug")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 780.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gess"),
        ..Default::default()
    };

    info!("Starting Gess");
    eframe::run_native(
        "Gess",
        options,
        Box::new(|cc| Ok(Box::new(GessApp::new(cc)))),
    )
}

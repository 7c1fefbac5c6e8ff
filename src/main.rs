mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::Path;

use app::FeeBoardApp;
use eframe::egui;
use state::AppState;

/// Default register file names probed in the working directory at startup.
/// A missing or unreadable file leaves the app in its empty "no data" state.
const DEFAULT_DATA_FILES: &[&str] = &["student_fees.xlsx", "student_fees.csv"];

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FeeBoard – Student Fee Dashboard",
        options,
        Box::new(|_cc| {
            let mut state = AppState::default();
            if let Some(path) = DEFAULT_DATA_FILES.iter().map(Path::new).find(|p| p.exists()) {
                state.load_from_path(path);
            }
            Ok(Box::new(FeeBoardApp { state }))
        }),
    )
}

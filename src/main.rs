#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use taskflow::app::TaskFlowApp;
use taskflow::io::{FileStorage, MemoryStorage, StoragePort};

fn main() -> eframe::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .ok();

    // Storage degrades to in-memory when no user data directory exists;
    // the session then simply isn't persisted.
    let storage: Box<dyn StoragePort> = match FileStorage::in_user_data_dir() {
        Ok(storage) => {
            log::info!("storing tasks at {}", storage.path().display());
            Box::new(storage)
        }
        Err(err) => {
            log::warn!("no durable storage available: {err}");
            Box::new(MemoryStorage::new())
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("TaskFlow"),
        ..Default::default()
    };

    eframe::run_native(
        "TaskFlow",
        options,
        Box::new(|cc| Ok(Box::new(TaskFlowApp::new(cc, storage)))),
    )
}

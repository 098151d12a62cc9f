// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use vocab_search::{config::settings::Settings, config::state::GuiState, gui, log};

fn main() {
    let (settings, problem) = match Settings::load_or_default(None) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    log::init(&settings.log_filter);
    if let Some(e) = problem {
        vocab_search::loge!("Settings: {e}; using defaults");
    }

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Vocab Search")
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

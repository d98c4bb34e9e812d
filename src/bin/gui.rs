// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use booth_scout::{cli, config::state::GuiState, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    let mode = match cli::detect_mode() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    let _log = log::init(mode.store_dir());

    if let cli::Mode::Cli(args) = mode {
        if let Err(e) = cli::execute(args) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

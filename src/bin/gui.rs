// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::env;

use eframe::egui::ViewportBuilder;
use income_explorer::{
    config::{
        args::{GUI_USAGE, Launch, apply_gui_args},
        options::AppOptions,
        state::GuiState,
    },
    gui,
    log,
};

fn main() {
    let _guard = log::init();

    let mut opts = AppOptions::from_env();
    match apply_gui_args(&mut opts, env::args().skip(1)) {
        Ok(Launch::Run) => {}
        Ok(Launch::Help) => {
            eprintln!("{}", GUI_USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}\n{}", e, GUI_USAGE);
            std::process::exit(2);
        }
    }

    let gui_defaults = GuiState::default();
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Income Explorer")
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, opts) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

// src/gui/components/results_bar.rs
//
// Toolbar above the table: copy format, headers toggle, Copy, status line.

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        if export.format != prev_fmt {
            logf!("UI: Copy format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        let can_copy = !app.screen.table.is_empty();
        if ui.add_enabled(can_copy, egui::Button::new("Copy table")).clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();
        ui.label(app.status.as_str());
    });
}

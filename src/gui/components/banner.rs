// src/gui/components/banner.rs
//
// The shared message line above the results. Hidden when there is nothing to say.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(banner) = app.screen.banner.as_ref() else { return };

    let color = if banner.is_error() {
        ui.visuals().error_fg_color
    } else {
        ui.visuals().warn_fg_color
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(banner.text()).color(color).strong());
        });
    ui.add_space(4.0);
}

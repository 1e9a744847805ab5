// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over `app.screen.table`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{
    gui::app::App,
    table::{HEADERS, VALUE_COL},
};

const COL_WIDTHS: [f32; 6] = [160.0, 140.0, 180.0, 60.0, 140.0, 100.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.screen.table;

    if table.is_empty() {
        ui.add_space(8.0);
        ui.weak("No results");
        return;
    }

    // Reserve space for the bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("results_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("results_table");
            for w in COL_WIDTHS {
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, h) in HEADERS.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(*h).strong()).selectable(false);
                            if ci == VALUE_COL {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let Some(cells) = table.rows.get(row.index()) else { return };
                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if ci == VALUE_COL {
                                    ui.centered_and_justified(|ui| { ui.label(cell.as_str()); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(cell.as_str());
                                    });
                                }
                            });
                        }
                    });
                });
        });
}

// src/gui/components/filter_sidebar.rs
//
// Renders the left filter form: country search + checklist, dataset
// drop-down, year checklist and Submit. Clicks are collected while drawing
// and handed to the panel afterwards (the lists are borrowed from `app.screen`).

use std::time::Instant;

use eframe::egui;
use crate::{
    config::consts::MSG_NO_OPTIONS,
    gui::{actions, app::App},
    panel::view::{Choice, Toggle},
    selection::CheckEntry,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();

    /* ---------- Countries ---------- */

    ui.heading("Countries");

    let search = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.search_text)
            .hint_text("Search…")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        app.panel.on_search_input(&app.state.gui.search_text, Instant::now());
    }

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.panel.select_visible_countries(&mut app.screen);
        }
        if ui.button("None").clicked() {
            app.panel.clear_countries(&mut app.screen);
        }
        let n = app.panel.selection().countries().len();
        ui.weak(format!("{} selected", n));
    });

    let toggled = checklist(
        ui,
        "countries_scroll",
        &app.screen.countries,
        app.screen.countries_loaded,
        avail_h * 0.45,
    );
    if let Some((value, checked)) = toggled {
        app.panel.on_country_toggle(&Toggle { value: &value, checked }, &mut app.screen);
        logd!("UI: Country {:?} → {}", value, checked);
    }

    ui.separator();

    /* ---------- Dataset ---------- */

    ui.heading("Dataset");

    let selected_text = match (&app.screen.dataset, app.screen.datasets_loaded) {
        (Some(d), _) => d.clone(),
        (None, true) => s!(MSG_NO_OPTIONS),
        (None, false) => s!("Loading…"),
    };
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("dataset_combo")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for d in &app.screen.datasets {
                let is_cur = app.screen.dataset.as_deref() == Some(d.as_str());
                if ui.selectable_label(is_cur, d.as_str()).clicked() && !is_cur {
                    picked = Some(d.clone());
                }
            }
        });
    if let Some(d) = picked {
        logd!("UI: Dataset → {:?}", d);
        app.panel.on_dataset_change(&Choice(Some(&d)), &mut app.screen);
    }

    ui.separator();

    /* ---------- Years ---------- */

    ui.heading("Years");

    let toggled = checklist(
        ui,
        "years_scroll",
        &app.screen.years,
        app.screen.years_loaded,
        avail_h * 0.25,
    );
    if let Some((value, checked)) = toggled {
        app.panel.on_year_toggle(&Toggle { value: &value, checked }, &mut app.screen);
    }

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Submit").clicked() {
            actions::submit(app);
        }
        if app.screen.busy {
            ui.add(egui::Spinner::new());
        }
    });
}

/// Scrollable checkbox list. Returns the entry the user flipped, if any.
fn checklist(
    ui: &mut egui::Ui,
    id: &str,
    entries: &[CheckEntry],
    loaded: bool,
    max_h: f32,
) -> Option<(String, bool)> {
    let mut toggled = None;

    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_h)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if entries.is_empty() {
                ui.weak(if loaded { MSG_NO_OPTIONS } else { "Loading…" });
                return;
            }
            for entry in entries {
                let mut checked = entry.checked;
                if ui.checkbox(&mut checked, entry.value.as_str()).changed() {
                    toggled = Some((entry.value.clone(), checked));
                }
            }
        });

    toggled
}

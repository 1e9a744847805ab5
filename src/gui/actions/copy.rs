// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let table = &app.screen.table;

    if table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = table.to_delimited(export.format.delim(), export.include_headers);
    logf!(
        "Copy: rows={}, format={:?}, headers={}",
        table.nrows(),
        export.format,
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

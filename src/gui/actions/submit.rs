// src/gui/actions/submit.rs
use crate::{gui::app::App, panel::Submitted};

pub fn submit(app: &mut App) {
    match app.panel.submit(&mut app.screen) {
        Submitted::Rejected => {
            app.status("Nothing sent");
        }
        Submitted::Sent(seq) => {
            logf!("UI: Submit #{}", seq);
            app.status(format!("Fetching (request #{seq})…"));
        }
    }
}

// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Instant};

use eframe::egui;

use crate::{
    backend::Backend,
    config::{options::AppOptions, state::AppState},
    core::net::HttpBackend,
    panel::{FilterPanel, Phase, tasks::{Spawn, Threaded}},
};

use super::{components, screen::Screen};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&options.net)?);
    logf!("Init: backend={}", options.net.base_url());

    eframe::run_native(
        "Income Explorer",
        native,
        Box::new(move |cc| {
            // Worker threads wake the UI when a response lands
            let ctx = cc.egui_ctx.clone();
            let spawner = Threaded::with_wake(move || ctx.request_repaint());
            Ok(Box::new(App::new(AppState::with_options(options), backend, Box::new(spawner))))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub panel: FilterPanel,

    // what the panel last rendered
    pub screen: Screen,

    // one-line status under the toolbar
    pub status: String,
}

impl App {
    pub fn new(state: AppState, backend: Arc<dyn Backend>, spawner: Box<dyn Spawn>) -> Self {
        let mut panel = FilterPanel::new(
            backend,
            spawner,
            state.options.net.endpoints,
            &state.options.view,
        );
        let mut screen = Screen::default();
        panel.load_filters(&mut screen);

        logf!(
            "Init: endpoints={:?}, locale={}, chart={}",
            state.options.net.endpoints,
            state.options.view.locale.tag(),
            state.options.view.show_chart
        );

        Self {
            state,
            panel,
            screen,
            status: s!("Loading filters…"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Status line follows the last submission once requests settle.
    fn sync_status(&mut self) {
        if self.panel.is_busy() {
            return;
        }
        let msg = match self.panel.phase() {
            Phase::Idle => {
                let n = self.panel.selection().countries().len();
                format!("{} countr{} selected", n, if n == 1 { "y" } else { "ies" })
            }
            Phase::Rendered => format!("{} row(s)", self.panel.table().nrows()),
            Phase::Empty => s!("No rows"),
            Phase::Invalid => s!("Nothing sent"),
            Phase::Failed => s!("Request failed"),
            Phase::Requesting => return,
        };
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.panel.poll(now, &mut self.screen) {
            self.sync_status();
        }
        // Come back when the debounced search is due
        if let Some(wait) = self.panel.search_deadline(now) {
            ctx.request_repaint_after(wait);
        }

        egui::SidePanel::left("filters")
            .resizable(true)
            .default_width(self.state.gui.side_panel_w)
            .show(ctx, |ui| {
                components::filter_sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::banner::draw(ui, self);

            components::results_bar::draw(ui, self);

            ui.separator();

            if self.state.options.view.show_chart && self.screen.chart.is_some() {
                components::chart_view::draw(ui, self);
                ui.separator();
            }

            components::data_table::draw(ui, self);
        });
    }
}

// src/panel/mod.rs
//
// FilterPanel: the controller behind the filter form.
//
// Owns the loaded options, the user's selection, the search debounce and the
// last rendered results. Frontends forward user events here and call `poll()`
// once per frame (GUI) or after each action (CLI); every backend completion
// is applied inside `poll()`, on the caller's thread.
//
// Submission lifecycle:
//   Idle → (invalid) Invalid
//        → (valid)   Requesting → Rendered | Empty | Failed

pub mod tasks;
pub mod view;

use std::sync::{Arc, mpsc::{self, Receiver, Sender}};
use std::time::{Duration, Instant};

use crate::{
    backend::{Backend, Endpoint},
    chart::ChartModel,
    config::options::{EndpointMode, ViewOptions},
    core::{collate::Locale, debounce::Debouncer, error::FetchResult},
    model::{FilterOptions, ResultRow},
    selection::{self, CheckEntry, SelectionState},
    table::TableData,
};

use tasks::{Job, Spawn};
use view::{Banner, Checkable, PanelView, Selectable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Invalid,
    Requesting,
    Rendered,
    Empty,
    Failed,
}

/// What `submit()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submitted {
    /// Validation failed; nothing was sent.
    Rejected,
    /// Request issued with this sequence number.
    Sent(u64),
}

enum Completion {
    Filters(FetchResult<FilterOptions>),
    Countries(FetchResult<Vec<String>>),
    Datasets(FetchResult<Vec<String>>),
    Years { seq: u64, result: FetchResult<Vec<String>> },
    Data { seq: u64, result: FetchResult<Vec<ResultRow>> },
}

pub struct FilterPanel {
    backend: Arc<dyn Backend>,
    spawner: Box<dyn Spawn>,
    mode: EndpointMode,
    locale: Locale,
    show_chart: bool,

    // countries kept in collation order
    options: FilterOptions,
    selection: SelectionState,
    query: String,
    search: Debouncer<String>,

    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    inflight: usize,
    data_seq: u64,
    years_seq: u64,

    phase: Phase,
    banner: Option<Banner>,
    results: Vec<ResultRow>,
    table: TableData,
    chart: Option<ChartModel>,
}

impl FilterPanel {
    pub fn new(
        backend: Arc<dyn Backend>,
        spawner: Box<dyn Spawn>,
        mode: EndpointMode,
        view: &ViewOptions,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            spawner,
            mode,
            locale: view.locale,
            show_chart: view.show_chart,
            options: FilterOptions::default(),
            selection: SelectionState::default(),
            query: s!(),
            search: Debouncer::new(view.debounce()),
            tx,
            rx,
            inflight: 0,
            data_seq: 0,
            years_seq: 0,
            phase: Phase::Idle,
            banner: None,
            results: Vec::new(),
            table: TableData::empty(),
            chart: None,
        }
    }

    /* ---------- read-only accessors ---------- */

    pub fn options(&self) -> &FilterOptions { &self.options }
    pub fn selection(&self) -> &SelectionState { &self.selection }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn banner(&self) -> Option<&Banner> { self.banner.as_ref() }
    pub fn results(&self) -> &[ResultRow] { &self.results }
    pub fn table(&self) -> &TableData { &self.table }
    pub fn chart(&self) -> Option<&ChartModel> { self.chart.as_ref() }
    pub fn query(&self) -> &str { &self.query }
    pub fn locale(&self) -> Locale { self.locale }
    pub fn mode(&self) -> EndpointMode { self.mode }

    #[inline]
    pub fn is_busy(&self) -> bool { self.inflight > 0 }

    #[inline]
    pub fn search_pending(&self) -> bool { self.search.is_pending() }

    /// How long until the pending search re-render is due.
    pub fn search_deadline(&self, now: Instant) -> Option<Duration> {
        self.search.remaining(now)
    }

    /// Checklist for the current query, selected first.
    pub fn visible_countries(&self) -> Vec<CheckEntry> {
        selection::country_list(&self.options.countries, &self.selection, &self.query, self.locale)
    }

    pub fn year_entries(&self) -> Vec<CheckEntry> {
        selection::year_list(&self.options.years, &self.selection)
    }

    /* ---------- loading ---------- */

    /// Fetch the filter options. Combined mode: one `/filters` call.
    /// Split mode: `/countries`, `/datasets` and `/years`, independently.
    pub fn load_filters(&mut self, view: &mut dyn PanelView) {
        logf!("Panel: Loading filters ({:?})", self.mode);
        match self.mode {
            EndpointMode::Combined => {
                self.dispatch(view, |b| Completion::Filters(b.filters()));
            }
            EndpointMode::Split => {
                self.dispatch(view, |b| Completion::Countries(b.countries()));
                self.dispatch(view, |b| Completion::Datasets(b.datasets()));
                self.refresh_years(view);
            }
        }
    }

    /// Split mode only: years for the single selected country, or all years.
    fn refresh_years(&mut self, view: &mut dyn PanelView) {
        self.years_seq += 1;
        let seq = self.years_seq;
        let country = match self.selection.countries() {
            [only] => Some(only.clone()),
            _ => None,
        };
        logd!("Panel: Refreshing years for {:?}", country);
        self.dispatch(view, move |b| Completion::Years { seq, result: b.years(country.as_deref()) });
    }

    fn dispatch<F>(&mut self, view: &mut dyn PanelView, call: F)
    where
        F: FnOnce(&dyn Backend) -> Completion + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.inflight += 1;
        view.set_busy(true);

        let job: Job = Box::new(move || {
            // Receiver gone means the panel was dropped; nothing to do.
            let _ = tx.send(call(backend.as_ref()));
        });

        // No worker available: run it here so the completion still arrives
        if let Err(job) = self.spawner.spawn(job) {
            loge!("Panel: Spawner refused the request, running it inline");
            job();
        }
    }

    /* ---------- event pump ---------- */

    /// Apply a due search and every finished request. Returns true if
    /// anything was rendered.
    pub fn poll(&mut self, now: Instant, view: &mut dyn PanelView) -> bool {
        let mut changed = false;

        if let Some(text) = self.search.fire_due(now) {
            self.apply_search(text, view);
            changed = true;
        }

        while let Ok(done) = self.rx.try_recv() {
            self.inflight = self.inflight.saturating_sub(1);
            self.apply(done, view);
            changed = true;
        }

        if changed {
            view.set_busy(self.is_busy());
        }
        changed
    }

    fn apply(&mut self, done: Completion, view: &mut dyn PanelView) {
        match done {
            Completion::Filters(Ok(mut opts)) => {
                self.locale.sort(&mut opts.countries);
                let pruned = self.selection.reconcile(&opts);
                logf!(
                    "Panel: Filters loaded (countries={}, datasets={}, years={}, pruned={})",
                    opts.countries.len(), opts.datasets.len(), opts.years.len(), pruned
                );
                self.options = opts;
                self.render_countries(view);
                self.render_datasets(view);
                self.render_years(view);
            }
            Completion::Filters(Err(e)) => {
                loge!("Panel: Error fetching filters: {}", e);
                self.show_banner(Banner::FiltersFailed, view);
            }

            Completion::Countries(Ok(mut list)) => {
                self.locale.sort(&mut list);
                let pruned = self.selection.retain_countries(&list);
                logf!("Panel: Countries loaded ({}, pruned={})", list.len(), pruned);
                self.options.countries = list;
                self.render_countries(view);
            }
            Completion::Datasets(Ok(list)) => {
                logf!("Panel: Datasets loaded ({})", list.len());
                self.selection.reconcile_dataset(&list);
                self.options.datasets = list;
                self.render_datasets(view);
            }
            Completion::Years { seq, result: Ok(list) } => {
                if seq != self.years_seq {
                    logd!("Panel: Dropping stale years response #{} (latest #{})", seq, self.years_seq);
                    return;
                }
                let pruned = self.selection.retain_years(&list);
                logf!("Panel: Years loaded ({}, pruned={})", list.len(), pruned);
                self.options.years = list;
                self.render_years(view);
            }
            Completion::Countries(Err(e)) => self.endpoint_failed(Endpoint::Countries, &e, view),
            Completion::Datasets(Err(e)) => self.endpoint_failed(Endpoint::Datasets, &e, view),
            Completion::Years { seq, result: Err(e) } => {
                if seq == self.years_seq {
                    self.endpoint_failed(Endpoint::Years, &e, view);
                }
            }

            Completion::Data { seq, result } => self.apply_data(seq, result, view),
        }
    }

    fn endpoint_failed(&mut self, ep: Endpoint, e: &crate::core::FetchError, view: &mut dyn PanelView) {
        loge!("Panel: Error fetching {}: {}", ep.path(), e);
        self.show_banner(Banner::EndpointFailed(ep), view);
    }

    /* ---------- user events ---------- */

    /// Debounced: only the last text within the delay gets rendered.
    pub fn on_search_input(&mut self, text: &str, now: Instant) {
        if self.search.schedule(now, s!(text)) {
            logd!("Panel: Search superseded by {:?}", text);
        }
    }

    /// Render a pending search right away (CLI, tests).
    pub fn flush_search(&mut self, view: &mut dyn PanelView) -> bool {
        match self.search.flush() {
            Some(text) => { self.apply_search(text, view); true }
            None => false,
        }
    }

    fn apply_search(&mut self, text: String, view: &mut dyn PanelView) {
        logd!("Panel: Search {:?}", text);
        self.query = text;
        self.render_countries(view);
    }

    pub fn on_country_toggle(&mut self, target: &dyn Checkable, view: &mut dyn PanelView) {
        self.toggle_country(target.value(), target.is_checked(), view);
    }

    pub fn toggle_country(&mut self, country: &str, checked: bool, view: &mut dyn PanelView) {
        if !self.selection.set_country(country, checked) {
            return;
        }
        logd!("Panel: Country {:?} → {} ({} selected)", country, checked, self.selection.countries().len());
        self.render_countries(view);
        if self.mode == EndpointMode::Split {
            self.refresh_years(view);
        }
    }

    /// Select every country in the current (search-filtered) list.
    pub fn select_visible_countries(&mut self, view: &mut dyn PanelView) {
        let visible: Vec<String> = self.visible_countries().into_iter().map(|e| e.value).collect();
        let added = self.selection.select_countries(visible.iter().map(String::as_str));
        logd!("Panel: Selected {} visible countries", added);
        if added > 0 {
            self.after_bulk_country_change(view);
        }
    }

    pub fn clear_countries(&mut self, view: &mut dyn PanelView) {
        if self.selection.clear_countries() > 0 {
            logd!("Panel: Cleared country selection");
            self.after_bulk_country_change(view);
        }
    }

    fn after_bulk_country_change(&mut self, view: &mut dyn PanelView) {
        self.render_countries(view);
        if self.mode == EndpointMode::Split {
            self.refresh_years(view);
        }
    }

    pub fn on_year_toggle(&mut self, target: &dyn Checkable, view: &mut dyn PanelView) {
        self.toggle_year(target.value(), target.is_checked(), view);
    }

    pub fn toggle_year(&mut self, year: &str, checked: bool, view: &mut dyn PanelView) {
        if self.selection.set_year(year, checked) {
            logd!("Panel: Year {:?} → {}", year, checked);
            self.render_years(view);
        }
    }

    pub fn on_dataset_change(&mut self, target: &dyn Selectable, view: &mut dyn PanelView) {
        if self.selection.set_dataset(target.selected_value()) {
            logd!("Panel: Dataset → {:?}", self.selection.dataset());
            self.render_datasets(view);
        }
    }

    /// Validate and send one `/data` request.
    pub fn submit(&mut self, view: &mut dyn PanelView) -> Submitted {
        let Some(query) = self.selection.to_query() else {
            logd!("Panel: Submit rejected (countries={}, years={})",
                self.selection.countries().len(), self.selection.years().len());
            // Anything still in flight answers a selection the user has undone
            self.data_seq += 1;
            self.phase = Phase::Invalid;
            self.show_banner(Banner::SelectionRequired, view);
            self.clear_results(view);
            return Submitted::Rejected;
        };

        self.data_seq += 1;
        let seq = self.data_seq;
        self.phase = Phase::Requesting;
        logf!(
            "Panel: Submit #{} countries={:?} years={:?} dataset={:?}",
            seq, query.countries, query.years, query.dataset
        );

        self.dispatch(view, move |b| Completion::Data { seq, result: b.data(&query) });
        Submitted::Sent(seq)
    }

    fn apply_data(&mut self, seq: u64, result: FetchResult<Vec<ResultRow>>, view: &mut dyn PanelView) {
        if seq != self.data_seq {
            logd!("Panel: Dropping stale data response #{} (latest #{})", seq, self.data_seq);
            return;
        }

        match result {
            Ok(rows) if rows.is_empty() => {
                logf!("Panel: Submit #{} returned no rows", seq);
                self.phase = Phase::Empty;
                self.clear_results(view);
                self.show_banner(Banner::NoData, view);
            }
            Ok(rows) => {
                logf!("Panel: Submit #{} returned {} rows", seq, rows.len());
                self.phase = Phase::Rendered;
                self.hide_banner(view);

                self.table = TableData::from_rows(&rows);
                view.render_table(&self.table);

                if self.show_chart {
                    let chart = ChartModel::from_rows(&rows);
                    view.render_chart(&chart);
                    self.chart = Some(chart);
                }
                self.results = rows;
            }
            Err(e) => {
                loge!("Panel: Error fetching data: {}", e);
                self.phase = Phase::Failed;
                self.show_banner(Banner::FetchFailed, view);
            }
        }
    }

    /* ---------- rendering helpers ---------- */

    fn render_countries(&self, view: &mut dyn PanelView) {
        view.render_countries(&self.visible_countries());
    }

    fn render_datasets(&self, view: &mut dyn PanelView) {
        view.render_datasets(&self.options.datasets, self.selection.dataset());
    }

    fn render_years(&self, view: &mut dyn PanelView) {
        view.render_years(&self.year_entries());
    }

    fn show_banner(&mut self, banner: Banner, view: &mut dyn PanelView) {
        view.show_banner(&banner);
        self.banner = Some(banner);
    }

    fn hide_banner(&mut self, view: &mut dyn PanelView) {
        self.banner = None;
        view.hide_banner();
    }

    fn clear_results(&mut self, view: &mut dyn PanelView) {
        self.results.clear();
        self.table.clear();
        self.chart = None;
        view.clear_table();
        view.clear_chart();
    }
}

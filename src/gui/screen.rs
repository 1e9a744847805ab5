// src/gui/screen.rs
//
// What the window currently shows. The panel renders into this through
// `PanelView`; the components only read it and report clicks back.

use crate::{
    chart::ChartModel,
    panel::view::{Banner, PanelView},
    selection::CheckEntry,
    table::TableData,
};

#[derive(Clone, Debug, Default)]
pub struct Screen {
    pub countries: Vec<CheckEntry>,
    pub datasets: Vec<String>,
    pub dataset: Option<String>,
    pub years: Vec<CheckEntry>,

    // set on first render so empty lists read "No data available", not "Loading…"
    pub countries_loaded: bool,
    pub datasets_loaded: bool,
    pub years_loaded: bool,

    pub banner: Option<Banner>,
    pub table: TableData,
    pub chart: Option<ChartModel>,
    pub busy: bool,
}

impl PanelView for Screen {
    fn render_countries(&mut self, entries: &[CheckEntry]) {
        self.countries = entries.to_vec();
        self.countries_loaded = true;
    }

    fn render_datasets(&mut self, datasets: &[String], selected: Option<&str>) {
        self.datasets = datasets.to_vec();
        self.dataset = selected.map(String::from);
        self.datasets_loaded = true;
    }

    fn render_years(&mut self, entries: &[CheckEntry]) {
        self.years = entries.to_vec();
        self.years_loaded = true;
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.banner = Some(banner.clone());
    }

    fn hide_banner(&mut self) {
        self.banner = None;
    }

    fn render_table(&mut self, table: &TableData) {
        self.table = table.clone();
    }

    fn clear_table(&mut self) {
        self.table.clear();
    }

    fn render_chart(&mut self, chart: &ChartModel) {
        self.chart = Some(chart.clone());
    }

    fn clear_chart(&mut self) {
        self.chart = None;
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}

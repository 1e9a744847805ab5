// src/panel/view.rs
//
// Capabilities the controller needs from a frontend. Nothing here knows
// about egui or a terminal; the GUI and CLI each provide a `PanelView`.

use crate::{
    backend::Endpoint,
    chart::ChartModel,
    config::consts::*,
    selection::CheckEntry,
    table::TableData,
};

/// A toggle-able control (checkbox-like).
pub trait Checkable {
    fn value(&self) -> &str;
    fn is_checked(&self) -> bool;
}

/// A single-choice control (drop-down-like).
pub trait Selectable {
    fn selected_value(&self) -> Option<&str>;
}

impl Checkable for CheckEntry {
    fn value(&self) -> &str { &self.value }
    fn is_checked(&self) -> bool { self.checked }
}

/// A checkbox change as reported by a frontend.
#[derive(Clone, Copy, Debug)]
pub struct Toggle<'a> {
    pub value: &'a str,
    pub checked: bool,
}

impl Checkable for Toggle<'_> {
    fn value(&self) -> &str { self.value }
    fn is_checked(&self) -> bool { self.checked }
}

/// A drop-down change as reported by a frontend.
#[derive(Clone, Copy, Debug)]
pub struct Choice<'a>(pub Option<&'a str>);

impl Selectable for Choice<'_> {
    fn selected_value(&self) -> Option<&str> { self.0 }
}

/// The single shared message area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    /// Combined `/filters` failed
    FiltersFailed,
    /// One of the split endpoints failed
    EndpointFailed(Endpoint),
    /// Submit without a country or year
    SelectionRequired,
    /// `/data` returned zero rows
    NoData,
    /// `/data` failed
    FetchFailed,
}

impl Banner {
    pub fn text(&self) -> String {
        match self {
            Banner::FiltersFailed => s!(MSG_FILTERS_FAILED),
            Banner::EndpointFailed(ep) => format!("Failed to load data from {}.", ep.path()),
            Banner::SelectionRequired => s!(MSG_SELECT_REQUIRED),
            Banner::NoData => s!(MSG_NO_DATA),
            Banner::FetchFailed => s!(MSG_FETCH_FAILED),
        }
    }

    /// `NoData` is informational; everything else is a failure.
    pub fn is_error(&self) -> bool {
        !matches!(self, Banner::NoData)
    }
}

pub trait PanelView {
    fn render_countries(&mut self, entries: &[CheckEntry]);
    fn render_datasets(&mut self, datasets: &[String], selected: Option<&str>);
    fn render_years(&mut self, entries: &[CheckEntry]);

    fn show_banner(&mut self, banner: &Banner);
    fn hide_banner(&mut self);

    fn render_table(&mut self, table: &TableData);
    fn clear_table(&mut self);

    fn render_chart(&mut self, chart: &ChartModel);
    fn clear_chart(&mut self);

    /// Requests outstanding or not.
    fn set_busy(&mut self, _busy: bool) {}
}

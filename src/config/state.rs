// src/config/state.rs
use super::options::AppOptions;

/// Frontend-only bits the controller does not care about.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw contents of the country search box (what the user typed)
    pub search_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Width of the left filter panel
    pub side_panel_w: f32,

    /// Chart height above the results table
    pub chart_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search_text: s!(),
            window_w: 1100,
            window_h: 700,
            side_panel_w: 260.0,
            chart_h: 260.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

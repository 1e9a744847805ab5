// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::core::collate::Locale;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub net: NetOptions,
    pub view: ViewOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, with the base URL taken from `INCOME_EXPLORER_URL` if set.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                opts.net.set_base_url(&url);
            }
        }
        opts
    }
}

/// Which flavour of the filter endpoints the backend speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EndpointMode {
    /// One `GET /filters` returning countries, datasets and years together.
    #[default]
    Combined,
    /// Older backends: `/countries`, `/datasets`, `/years[?country=]`.
    Split,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    base_url: String,
    pub endpoints: EndpointMode,
    pub timeout_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            endpoints: EndpointMode::Combined,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl NetOptions {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trailing slashes are dropped so endpoint paths can be appended as-is.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().trim_end_matches('/').to_string();
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn url_for(&self, path: &str) -> String {
        join!(self.base_url.as_str(), path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    /// Collation used for sorting and search matching.
    pub locale: Locale,
    pub debounce_ms: u64,
    pub show_chart: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            locale: Locale::Turkish,
            debounce_ms: SEARCH_DEBOUNCE_MS,
            show_chart: true,
        }
    }
}

impl ViewOptions {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    #[default]
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Tsv,
            include_headers: true,
        }
    }
}

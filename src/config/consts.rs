// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BASE_URL_ENV: &str = "INCOME_EXPLORER_URL";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("income_explorer/", env!("CARGO_PKG_VERSION"));

// Endpoints
pub const FILTERS_PATH: &str = "/filters";
pub const COUNTRIES_PATH: &str = "/countries";
pub const DATASETS_PATH: &str = "/datasets";
pub const YEARS_PATH: &str = "/years";
pub const DATA_PATH: &str = "/data";

// Search box
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Banner texts
pub const MSG_FILTERS_FAILED: &str = "Failed to load filter data.";
pub const MSG_SELECT_REQUIRED: &str = "Please select at least one country and one year.";
pub const MSG_NO_DATA: &str = "No data found for the selected filters.";
pub const MSG_FETCH_FAILED: &str = "An error occurred while fetching data.";
pub const MSG_NO_OPTIONS: &str = "No data available";

// Table
pub const MISSING_VALUE: &str = "N/A";

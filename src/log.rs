// src/log.rs
//
// Thin logging facade. Call sites use logf!/logd!/loge!; the macros forward
// to `tracing`, and `init()` wires a non-blocking file writer.

use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Install the global subscriber writing to `.store/debug.log`.
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the background writer. Returns `None` if a subscriber
/// was already installed (tests, embedding).
pub fn init() -> Option<WorkerGuard> {
    init_in(Path::new(LOG_DIR))
}

pub fn init_in(dir: &Path) -> Option<WorkerGuard> {
    let _ = fs::create_dir_all(dir);
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    installed.then_some(guard)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

// src/log.rs
//
// Logging bootstrap. Everything in the crate logs through the three short
// macros below; they forward to `tracing`, and `init` wires a file appender
// under the store directory plus an env-driven filter.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::LOG_FILE;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the global subscriber writing to `<dir>/debug.log`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer. Returns `None` when a subscriber
/// was already installed.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return None;
    }
    let _ = std::fs::create_dir_all(dir);

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
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

// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging setup shared by the memfs crates.
//!
//! Output is controlled by the `MEMFS_LOG` environment variable:
//! - `off` (default): nothing is emitted
//! - `error`, `warn`, `info`, `debug`: minimum level written to stderr
//!
//! Library code logs through the `debug!`/`info!`/`warn!`/`error!` macros
//! below; only a host application or a test harness calls [`init`].

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV: &str = "MEMFS_LOG";

static INIT: Once = Once::new();

/// Requested logging level, parsed from [`LOG_ENV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSetting {
    Off,
    Level(emit::Level),
    /// Unrecognized value; treated as `info`.
    Unknown,
}

impl LogSetting {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => LogSetting::Off,
            "debug" => LogSetting::Level(emit::Level::Debug),
            "info" => LogSetting::Level(emit::Level::Info),
            "warn" => LogSetting::Level(emit::Level::Warn),
            "error" => LogSetting::Level(emit::Level::Error),
            _ => LogSetting::Unknown,
        }
    }

    fn min_level(self) -> Option<emit::Level> {
        match self {
            LogSetting::Off => None,
            LogSetting::Level(level) => Some(level),
            LogSetting::Unknown => Some(emit::Level::Info),
        }
    }
}

/// Initialize diagnostics based on the `MEMFS_LOG` environment variable.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_default();
        let setting = LogSetting::parse(&raw);
        let Some(level) = setting.min_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if setting == LogSetting::Unknown {
            emit::warn!("unknown {env} value {raw}, using info", env: LOG_ENV, raw);
        }

        // The runtime must outlive every later log call.
        std::mem::forget(rt);
    });
}

/// Operations a caller would want to see in normal usage.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Internal detail: lookups, mutations, path resolution.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Recoverable oddities.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;

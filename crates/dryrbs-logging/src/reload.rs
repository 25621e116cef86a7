//! Dynamic log level reloading support

use dryrbs_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Handle for changing the level filter of an installed subscriber
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, Registry>>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// The handle used by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, Registry>) {
        *self.handle.lock() = Some(handle);
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Switch the filter to `level`
    ///
    /// Fails when no handle was set, e.g. because `RUST_LOG` selected an
    /// `EnvFilter` at startup, or when the subscriber has been dropped.
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        let Some(handle) = guard.as_ref() else {
            return Err("Reload handle not initialized".to_string());
        };

        handle
            .reload(convert_level_to_filter(level))
            .map_err(|e| format!("Failed to reload filter: {e}"))
    }

    /// The level currently in effect, if a live subscriber is attached
    #[cfg(test)]
    pub(crate) fn current_filter(&self) -> Option<LevelFilter> {
        self.handle.lock().as_ref().and_then(|h| h.clone_current())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;

//! Subscriber installation and the event counting layer

use crate::reload::{ReloadHandle, convert_level_to_filter};
use dryrbs_core::LogLevel;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::{EnvFilter, Layer, reload};

static EVENT_COUNTS: OnceCell<EventCounts> = OnceCell::new();

/// Number of warning and error events seen since the last reset
#[derive(Debug, Default)]
pub struct EventCounts {
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

impl EventCounts {
    pub const fn new() -> Self {
        Self {
            warnings: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }

    /// Counts fed by the layer that [`init_logging`] installs
    pub fn global() -> &'static EventCounts {
        EVENT_COUNTS.get_or_init(EventCounts::new)
    }

    pub fn record(&self, level: LogLevel) {
        match level {
            LogLevel::Warn => self.warnings.fetch_add(1, Ordering::Relaxed),
            LogLevel::Error => self.errors.fetch_add(1, Ordering::Relaxed),
            _ => return,
        };
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.warnings.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
    }
}

/// Tracing layer that counts enabled warning and error events
pub struct EventCountLayer {
    counts: &'static EventCounts,
}

impl EventCountLayer {
    /// Create a layer feeding the global counts
    pub fn new() -> Self {
        Self {
            counts: EventCounts::global(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_counts(counts: &'static EventCounts) -> Self {
        Self { counts }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for EventCountLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for EventCountLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.counts.record(Self::convert_level(event.metadata().level()));
    }
}

/// Install the global subscriber
///
/// Events are formatted to stderr. When `RUST_LOG` is set it takes precedence
/// over `level` and the level cannot be reloaded; otherwise the level filter
/// is registered with [`ReloadHandle::global`]. Calling this more than once
/// leaves the first subscriber in place.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(EventCountLayer::new());
        let _ = tracing::subscriber::set_global_default(subscriber);
        return;
    }

    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EventCountLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle);
    }
}

//! dryrbs-logging - tracing setup for dryrbs
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber at a given [`LogLevel`]
//! - [`ReloadHandle`] to change the level after initialization
//! - [`EventCountLayer`] counting warnings and errors for run summaries

mod layer;
mod reload;

pub use dryrbs_core::LogLevel;
pub use layer::{EventCountLayer, EventCounts, init_logging};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{EventCounts, LogLevel, ReloadHandle, init_logging};
}

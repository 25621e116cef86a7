#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use tracing_subscriber::prelude::*;

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn convert_level_to_filter___maps_every_level(level: LogLevel, expected: LevelFilter) {
    assert_eq!(convert_level_to_filter(level), expected);
}

#[test]
fn ReloadHandle___reload_without_handle___fails() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert!(!handle.is_initialized());
    assert_eq!(result.unwrap_err(), "Reload handle not initialized");
}

#[test]
fn ReloadHandle___reload_with_live_subscriber___changes_filter() {
    let (filter, reload_handle) = reload::Layer::new(LevelFilter::WARN);
    let _subscriber = tracing_subscriber::registry().with(filter);
    let handle = ReloadHandle::new();
    handle.set_handle(reload_handle);

    handle.reload_level(LogLevel::Debug).unwrap();

    assert!(handle.is_initialized());
    assert_eq!(handle.current_filter(), Some(LevelFilter::DEBUG));
}

#[test]
fn ReloadHandle___reload_after_subscriber_dropped___fails() {
    let (filter, reload_handle) = reload::Layer::new(LevelFilter::WARN);
    drop(tracing_subscriber::registry().with(filter));
    let handle = ReloadHandle::new();
    handle.set_handle(reload_handle);

    let result = handle.reload_level(LogLevel::Info);

    assert!(result.unwrap_err().starts_with("Failed to reload filter"));
    assert_eq!(handle.current_filter(), None);
}

#[test]
fn ReloadHandle___global___is_a_singleton() {
    assert!(std::ptr::eq(ReloadHandle::global(), ReloadHandle::global()));
}

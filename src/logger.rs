//! Logging setup.
//!
//! The library only emits `tracing` events; the binary installs a compact
//! `[LEVEL] message` subscriber through [`init_with_level`].
//!
//! ```rust
//! use weasel::config::LogLevel;
//!
//! weasel::logger::init_with_level(LogLevel::Debug);
//! tracing::debug!("solved u1 |-> Number");
//! ```

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Install the global subscriber. Calling it a second time is a no-op.
pub fn init_with_level(level: LogLevel) {
    let filter = LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

pub fn init() {
    init_with_level(LogLevel::Info);
}

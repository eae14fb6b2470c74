//! Logging utilities
//!
//! The crate logs through the `log` facade. Binaries pick the backend; the
//! helpers here set up `env_logger` the way the demo application expects.

pub use log::{debug, error, info, trace, warn};

/// Initialize `env_logger`, honouring `RUST_LOG` and falling back to `default_level`
pub fn init(default_level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

/// Log each item of a list on its own indented line
pub fn log_list<I>(items: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for item in items {
        log::info!("\t\"{}\"", item.as_ref());
    }
}

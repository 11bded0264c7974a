// renamecheck/src/logger.rs
//! Logger initialization for the CLI.
//!
//! Logs go to stderr through `env_logger`, so stdout only ever carries the
//! report. `RUST_LOG` is honored unless a level is forced.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "info";

/// Initializes the global logger. `Some(level)` overrides `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}

/// Level forced by the `--debug` / `--quiet` flags. `--debug` wins.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if debug {
        Some(LevelFilter::Debug)
    } else if quiet {
        Some(LevelFilter::Error)
    } else {
        None
    }
}

// renamecheck/src/lib.rs
//! # renamecheck CLI
//!
//! Terminal front end for `renamecheck-core`: argument parsing, logging
//! set-up, report output and exit codes.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::check::{run_check, CheckError, CheckOptions};

// renamecheck/src/main.rs
//! renamecheck entry point.
//!
//! Parses arguments, sets up logging and the theme, runs the check and maps
//! its outcome to the process exit code.

use clap::Parser;
use std::process::ExitCode;

use renamecheck::cli::Cli;
use renamecheck::commands::check::{error_msg, run_check, CheckOptions};
use renamecheck::logger;
use renamecheck::ui::theme::{build_theme_map, ThemeStyle};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme_map) => theme_map,
        Err(e) => {
            error_msg(format!("Theme error: {e:#}"), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    let opts = CheckOptions::from(&cli);
    match run_check(&opts, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(e.to_string(), &theme_map);
            ExitCode::from(e.exit_code())
        }
    }
}

// renamecheck/src/cli.rs
//! Command-line interface definition for `renamecheck`.
//! License: MIT OR APACHE 2.0

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use renamecheck_core::{EngineChoice, SubstitutionMode};

/// Default preference file, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "AllSub-AdBlock.toml";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "renamecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate subscription node rename rules against sample node names",
    long_about = "renamecheck loads the `node_pref.rename_node` rules of a subscription-converter preference file (TOML or YAML), applies them in order to a list of sample node names, and reports what every rule did to every sample."
)]
pub struct Cli {
    /// Preference file holding the rename rules.
    #[arg(long, value_name = "FILE", env = "RENAMECHECK_CONFIG", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Samples to test: a text file (one name per line) or a JSON/TOML/YAML case list.
    #[arg(long, value_name = "FILE", env = "RENAMECHECK_CASES", help = "Use samples from a file instead of the built-in list.")]
    pub cases: Option<PathBuf>,

    /// Emit the report as JSON.
    #[arg(long, help = "Emit the report as pretty JSON.")]
    pub json: bool,

    /// Write the report to this file instead of stdout.
    #[arg(long, value_name = "FILE", env = "RENAMECHECK_OUT", help = "Write the report to a file (JSON when it ends in .json).")]
    pub out: Option<PathBuf>,

    /// Replace only the first match of each rule.
    #[arg(long, help = "Replace only the first match of each rule.")]
    pub first: bool,

    /// Fail unless the rich regex engine is in use.
    #[arg(long = "require-rich", alias = "require-regex", help = "Fail with exit code 5 unless the rich (fancy-regex) engine is active.")]
    pub require_rich: bool,

    /// Regex engine to use.
    #[arg(long, value_enum, value_name = "ENGINE", env = "RENAMECHECK_ENGINE", default_value_t = EngineArg::Auto)]
    pub engine: EngineArg,

    /// Print per-rule hit and failure counts.
    #[arg(long, help = "Print a per-rule summary table on stderr.")]
    pub summary: bool,

    /// Skip the built-in multiplier checks.
    #[arg(long = "skip-self-check", help = "Do not verify the built-in multiplier expectations.")]
    pub skip_self_check: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    pub fn substitution_mode(&self) -> SubstitutionMode {
        if self.first {
            SubstitutionMode::FirstOnly
        } else {
            SubstitutionMode::All
        }
    }
}

/// Engine names accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    /// fancy-regex when built in, otherwise regex
    #[default]
    Auto,
    /// fancy-regex (lookaround, backreferences)
    Fancy,
    /// the regex crate
    Standard,
}

impl From<EngineArg> for EngineChoice {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Auto => EngineChoice::Auto,
            EngineArg::Fancy => EngineChoice::Fancy,
            EngineArg::Standard => EngineChoice::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["renamecheck", "--config", "pref.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("pref.toml"));
        assert_eq!(cli.substitution_mode(), SubstitutionMode::All);
        assert!(!cli.require_rich);
    }

    #[test]
    fn require_regex_alias_and_first() {
        let cli = Cli::try_parse_from(["renamecheck", "--config", "p.toml", "--require-regex", "--first", "--engine", "standard"])
            .unwrap();
        assert!(cli.require_rich);
        assert_eq!(cli.substitution_mode(), SubstitutionMode::FirstOnly);
        assert_eq!(EngineChoice::from(cli.engine), EngineChoice::Standard);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

//! The `renamecheck` run: load, apply, report, self-check.
//!
//! Fatal problems surface as a [`CheckError`] whose `exit_code` the binary
//! returns. Per-rule failures never end up here; they are part of the report.

use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use renamecheck_core::report::transcript_lines;
use renamecheck_core::{
    load_samples, render_json, run_batch, run_self_check, select_engine, summarize_rules, ConfigError,
    EngineChoice, EngineUnavailable, RenameConfig, RenameRule, ReportFormat, RunResult, SampleSource,
    SubstitutionMode, BUILTIN_EXPECTATIONS,
};

use crate::cli::Cli;
use crate::ui::output_format;
use crate::ui::rule_summary;
use crate::ui::theme::ThemeMap;

/// Everything a check run needs, detached from argument parsing.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub config_path: PathBuf,
    pub cases_path: Option<PathBuf>,
    pub json: bool,
    pub output_path: Option<PathBuf>,
    pub mode: SubstitutionMode,
    pub engine: EngineChoice,
    pub require_rich: bool,
    pub summary: bool,
    pub self_check: bool,
    pub quiet: bool,
}

impl From<&Cli> for CheckOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            cases_path: cli.cases.clone(),
            json: cli.json,
            output_path: cli.out.clone(),
            mode: cli.substitution_mode(),
            engine: cli.engine.into(),
            require_rich: cli.require_rich,
            summary: cli.summary,
            self_check: !cli.skip_self_check,
            quiet: cli.quiet,
        }
    }
}

/// Fatal outcomes of a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    Config(ConfigError),

    #[error("Failed to load samples: {0:#}")]
    Samples(anyhow::Error),

    #[error("Rich regex engine required but '{0}' is active (build with the `fancy` feature and use --engine auto or fancy)")]
    RichEngineRequired(&'static str),

    #[error(transparent)]
    EngineUnavailable(#[from] EngineUnavailable),

    #[error("Failed to render JSON report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write results to {destination}: {source}")]
    Write {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("Self-check failed: {0} case(s) did not produce the expected name")]
    SelfCheck(usize),
}

impl CheckError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::ConfigNotFound(_) => 2,
            CheckError::Write { .. } => 3,
            CheckError::SelfCheck(_) => 4,
            CheckError::RichEngineRequired(_) | CheckError::EngineUnavailable(_) => 5,
            CheckError::Config(_) | CheckError::Samples(_) | CheckError::Render(_) => 1,
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::NotFound(path) => CheckError::ConfigNotFound(path),
            other => CheckError::Config(other),
        }
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Runs one check: load rules and samples, apply, write the report, self-check.
pub fn run_check(opts: &CheckOptions, theme_map: &ThemeMap) -> Result<(), CheckError> {
    info!("Starting renamecheck run.");

    if !opts.config_path.exists() {
        return Err(CheckError::ConfigNotFound(opts.config_path.clone()));
    }

    let source = opts.cases_path.clone().map(SampleSource::File).unwrap_or_default();
    let samples = load_samples(&source).map_err(CheckError::Samples)?;
    let config = RenameConfig::load_from_file(&opts.config_path)?;

    let engine = select_engine(opts.engine)?;
    if opts.require_rich && !engine.is_rich() {
        return Err(CheckError::RichEngineRequired(engine.name()));
    }
    info!("Using regex engine: {}", engine.name());

    let results = run_batch(samples.as_slice(), &config.rules, engine.as_ref(), opts.mode);

    if opts.summary {
        handle_rule_summary(&config.rules, &results, theme_map);
    }

    write_report(opts, &results, theme_map)?;

    if opts.self_check {
        handle_self_check(&results, opts.quiet, theme_map)?;
    }

    info!("renamecheck run completed.");
    Ok(())
}

fn handle_rule_summary(rules: &[RenameRule], results: &[RunResult], theme_map: &ThemeMap) {
    let summary = summarize_rules(rules, results);
    let supports_color = io::stderr().is_terminal();
    if let Err(e) = rule_summary::print_summary(&summary, &mut io::stderr(), theme_map, supports_color) {
        debug!("Could not print rule summary: {}", e);
    }
}

fn write_report(opts: &CheckOptions, results: &[RunResult], theme_map: &ThemeMap) -> Result<(), CheckError> {
    let format = ReportFormat::for_output(opts.json, opts.output_path.as_deref());
    let json = match format {
        ReportFormat::Json => Some(render_json(results)?),
        ReportFormat::Text => None,
    };

    match &opts.output_path {
        Some(path) => {
            let content = match json {
                Some(json) => json,
                None => renamecheck_core::render_text(results),
            };
            write_file(path, &content).map_err(|source| CheckError::Write {
                destination: path.display().to_string(),
                source,
            })?;
            if !opts.quiet {
                success_msg(format!("Wrote results to {}", path.display()), theme_map);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let written = match json {
                Some(json) => writeln!(writer, "{json}"),
                None => {
                    let supports_color = stdout.is_terminal();
                    output_format::write_transcript(&mut writer, &transcript_lines(results), theme_map, supports_color)
                }
            };
            written.and_then(|()| writer.flush()).map_err(|source| CheckError::Write {
                destination: "stdout".to_string(),
                source,
            })?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    writeln!(file, "{content}")?;
    file.flush()
}

fn handle_self_check(results: &[RunResult], quiet: bool, theme_map: &ThemeMap) -> Result<(), CheckError> {
    let report = run_self_check(results, BUILTIN_EXPECTATIONS);
    for original in &report.missing {
        warn_msg(format!("Self-check case not in samples: {original}"), theme_map);
    }
    for mismatch in &report.mismatches {
        error_msg(
            format!(
                "Self-check mismatch for '{}': expected '{}', got '{}'",
                mismatch.original, mismatch.expected, mismatch.actual
            ),
            theme_map,
        );
    }
    if !report.passed() {
        return Err(CheckError::SelfCheck(report.mismatches.len()));
    }
    if !quiet {
        info_msg(
            format!(
                "Self-check passed ({} of {} cases present).",
                BUILTIN_EXPECTATIONS.len() - report.missing.len(),
                BUILTIN_EXPECTATIONS.len()
            ),
            theme_map,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        assert_eq!(CheckError::ConfigNotFound(PathBuf::from("x")).exit_code(), 2);
        assert_eq!(
            CheckError::Write { destination: "out".into(), source: io::Error::other("disk full") }.exit_code(),
            3
        );
        assert_eq!(CheckError::SelfCheck(1).exit_code(), 4);
        assert_eq!(CheckError::RichEngineRequired("regex").exit_code(), 5);
        assert_eq!(CheckError::EngineUnavailable(EngineUnavailable("fancy-regex".into())).exit_code(), 5);
        assert_eq!(CheckError::Samples(anyhow::anyhow!("bad")).exit_code(), 1);
    }

    #[test]
    fn missing_config_error_maps_to_not_found() {
        let err = CheckError::from(ConfigError::NotFound(PathBuf::from("gone.toml")));
        assert!(matches!(err, CheckError::ConfigNotFound(_)));
        assert_eq!(err.to_string(), "Config not found: gone.toml");
    }

    #[test]
    fn write_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/report.txt");
        write_file(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}

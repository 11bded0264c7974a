//! Sample node names to run the rename rules against.
//!
//! Samples come from the embedded default list or from a file. Files ending
//! in `.json`, `.toml`, `.yml` or `.yaml` are structured case definitions
//! (a bare list of strings, or a `cases` list); anything else is read as
//! plain text with one sample per line.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::strip_bom;

/// Conventional name of the list in structured case definitions.
pub const CASES_KEY: &str = "cases";

/// Where the samples of a run come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SampleSource {
    /// The node names bundled with the library.
    #[default]
    Builtin,
    /// A case definition or text file on disk.
    File(PathBuf),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaseDefinition {
    List(Vec<String>),
    Named { cases: Vec<String> },
}

impl CaseDefinition {
    fn into_cases(self) -> Vec<String> {
        match self {
            CaseDefinition::List(cases) | CaseDefinition::Named { cases } => cases,
        }
    }
}

/// Returns the bundled default samples.
pub fn default_samples() -> Vec<String> {
    parse_sample_lines(include_str!("../config/default_samples.txt"))
}

/// One sample per line, trimmed, blank lines skipped.
pub fn parse_sample_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads samples from `source`.
pub fn load_samples(source: &SampleSource) -> Result<Vec<String>> {
    let samples = match source {
        SampleSource::Builtin => {
            debug!("Using bundled default samples.");
            default_samples()
        }
        SampleSource::File(path) => load_samples_from_file(path)?,
    };
    info!("Loaded {} samples.", samples.len());
    Ok(samples)
}

fn load_samples_from_file(path: &Path) -> Result<Vec<String>> {
    info!("Loading samples from: {}", path.display());
    let raw = std::fs::read(path).with_context(|| format!("Failed to read cases file {}", path.display()))?;
    let text = String::from_utf8(strip_bom(&raw).to_vec())
        .with_context(|| format!("Cases file {} is not valid UTF-8", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let definition: CaseDefinition = match extension.as_str() {
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON cases file {}", path.display()))?,
        "toml" => toml::from_str(&text)
            .with_context(|| format!("Failed to parse TOML cases file {}", path.display()))?,
        "yml" | "yaml" => serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML cases file {}", path.display()))?,
        _ => return Ok(parse_sample_lines(&text)),
    };
    Ok(definition.into_cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_samples_cover_multiplier_cases() {
        let samples = default_samples();
        assert!(samples.len() > 100);
        assert!(samples.iter().any(|s| s == "🇩🇪 德国-V6|01 0.5x"));
        assert!(samples.iter().any(|s| s == "🇭🇰 [CN]HK专线01-【5倍率】"));
    }

    #[test]
    fn text_lines_are_trimmed_and_blank_lines_skipped() {
        let samples = parse_sample_lines("  HK 01  \n\n\t\nJP 02\r\n");
        assert_eq!(samples, vec!["HK 01", "JP 02"]);
    }

    #[test]
    fn case_definitions_accept_list_or_named_list() {
        let list: CaseDefinition = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(list.into_cases(), vec!["a", "b"]);
        let named: CaseDefinition = serde_json::from_str(r#"{"cases": ["c"]}"#).unwrap();
        assert_eq!(named.into_cases(), vec!["c"]);
        let toml_named: CaseDefinition = toml::from_str("cases = [\"d\", \"e\"]").unwrap();
        assert_eq!(toml_named.into_cases(), vec!["d", "e"]);
    }
}

//! Configuration management for `renamecheck-core`.
//!
//! This module loads subscription-converter preference documents (TOML or
//! YAML), strips a leading byte-order mark, and extracts the ordered list of
//! `node_pref.rename_node` rules. Extraction works on a generic document tree
//! so that both formats share one code path.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::errors::ConfigError;

/// Section holding node preferences.
pub const NODE_PREF_KEY: &str = "node_pref";
/// List of rename entries inside [`NODE_PREF_KEY`].
pub const RENAME_NODE_KEY: &str = "rename_node";

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// A single rename rule: a pattern and the template its matches are replaced with.
///
/// Rules are identified by their 1-based position in the extracted list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RenameRule {
    /// The regex pattern, exactly as written in the config (`match`).
    #[serde(rename = "match")]
    pub pattern: String,
    /// The replacement template with `$N` backreferences (`replace`).
    #[serde(rename = "replace")]
    pub replacement: String,
}

impl RenameRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Supported on-disk formats for preference documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension; anything that is not YAML is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "yml" || ext == "yaml" => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

/// The rename rules extracted from one preference document, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameConfig {
    pub rules: Vec<RenameRule>,
}

impl RenameConfig {
    /// Loads rename rules from a TOML or YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        info!("Loading rename rules from: {}", path.display());

        let raw = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(strip_bom(&raw).to_vec()).map_err(|source| ConfigError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_str_with_format(&text, ConfigFormat::from_path(path))?;
        info!("Loaded {} rename rules from {}.", config.rules.len(), path.display());
        Ok(config)
    }

    /// Parses a preference document held in memory.
    pub fn from_str_with_format(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let document = parse_document(text, format)?;
        Ok(Self {
            rules: extract_rules(&document),
        })
    }
}

/// Removes a leading UTF-8 byte-order mark, if present.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Parses `text` into a format-neutral document tree.
pub fn parse_document(text: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    match format {
        ConfigFormat::Toml => {
            let table: toml::Table = toml::from_str(text)?;
            Ok(serde_json::to_value(table)?)
        }
        ConfigFormat::Yaml if text.trim().is_empty() => Ok(Value::Null),
        ConfigFormat::Yaml => Ok(serde_yml::from_str(text)?),
    }
}

/// Extracts `node_pref.rename_node` entries carrying both a string `match`
/// and a string `replace`, preserving order and duplicates.
///
/// Missing sections yield an empty list; incomplete entries are skipped.
pub fn extract_rules(document: &Value) -> Vec<RenameRule> {
    let Some(entries) = document
        .get(NODE_PREF_KEY)
        .and_then(|pref| pref.get(RENAME_NODE_KEY))
        .and_then(Value::as_array)
    else {
        debug!("No `{}.{}` list found; no rules extracted.", NODE_PREF_KEY, RENAME_NODE_KEY);
        return Vec::new();
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let pattern = entry.get("match").and_then(Value::as_str);
        let replacement = entry.get("replace").and_then(Value::as_str);
        match (pattern, replacement) {
            (Some(pattern), Some(replacement)) => rules.push(RenameRule::new(pattern, replacement)),
            _ => warn!(
                "Skipping rename entry #{}: it needs both a string `match` and a string `replace`.",
                position + 1
            ),
        }
    }
    rules
}

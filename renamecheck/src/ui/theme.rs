//! Color theme for the CLI output.
//!
//! Every transcript line kind and message class maps to a `ThemeEntry`.
//! A user theme is a YAML map from entry name to `{ fg: <color> }`; entries
//! it leaves out keep their default color.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use renamecheck_core::report::LineKind;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// The `---` line between samples.
    Separator,
    Original,
    Final,
    AppliedHeader,
    RuleApplied,
    RuleFailed,
    NoRules,
    SummaryHits,
    SummaryFailures,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 14] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Separator,
        ThemeEntry::Original,
        ThemeEntry::Final,
        ThemeEntry::AppliedHeader,
        ThemeEntry::RuleApplied,
        ThemeEntry::RuleFailed,
        ThemeEntry::NoRules,
        ThemeEntry::SummaryHits,
        ThemeEntry::SummaryFailures,
    ];

    fn default_color(self) -> &'static str {
        match self {
            ThemeEntry::Header | ThemeEntry::AppliedHeader => "cyan",
            ThemeEntry::Success | ThemeEntry::Final | ThemeEntry::RuleApplied | ThemeEntry::SummaryHits => "green",
            ThemeEntry::Warn => "yellow",
            ThemeEntry::Error | ThemeEntry::RuleFailed | ThemeEntry::SummaryFailures => "red",
            ThemeEntry::Separator | ThemeEntry::NoRules => "brightblack",
            ThemeEntry::Info | ThemeEntry::Original => "white",
        }
    }
}

impl From<LineKind> for ThemeEntry {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Separator => ThemeEntry::Separator,
            LineKind::Original => ThemeEntry::Original,
            LineKind::Final => ThemeEntry::Final,
            LineKind::AppliedHeader => ThemeEntry::AppliedHeader,
            LineKind::RuleApplied => ThemeEntry::RuleApplied,
            LineKind::RuleFailed => ThemeEntry::RuleFailed,
            LineKind::NoRules => ThemeEntry::NoRules,
        }
    }
}

/// A named 16-color ANSI color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
}

#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" | "brightblack"
            | "brightred" | "brightgreen" | "brightyellow" | "brightblue" | "brightmagenta" | "brightcyan"
            | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Style of one `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads the theme at `theme_path`, or the default theme when none is given.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    /// Reads a YAML theme, rejects unknown color names, and fills in defaults
    /// for the entries it omits.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = if text.trim().is_empty() {
            HashMap::new()
        } else {
            serde_yml::from_str(&text).with_context(|| format!("Failed to parse theme file {}", path.display()))?
        };
        for (entry, style) in custom.iter_mut() {
            let Some(ThemeColor::Named(name)) = style.fg.take() else {
                continue;
            };
            let color = name
                .parse::<ThemeColor>()
                .with_context(|| format!("Invalid color '{}' for {:?} in theme file {}", name, entry, path.display()))?;
            style.fg = Some(color);
        }
        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .into_iter()
            .map(|entry| {
                let style = ThemeStyle {
                    fg: Some(ThemeColor::Named(entry.default_color().into())),
                };
                (entry, style)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(theme.len(), ThemeEntry::ALL.len());
        let failed = theme[&ThemeEntry::RuleFailed].fg.as_ref().unwrap();
        assert_eq!(failed.to_ansi_color(), AnsiColors::Red);
    }

    #[test]
    fn misspelled_color_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "final:\n  fg: bleu").unwrap();
        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid color 'bleu'"));
    }

    #[test]
    fn color_names_are_case_insensitive() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "warn:\n  fg: BrightYellow").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(theme[&ThemeEntry::Warn].fg, Some(ThemeColor::Named("brightyellow".to_string())));
    }

    #[test]
    fn custom_theme_merges_over_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rule_applied:\n  fg: magenta").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(theme.len(), ThemeEntry::ALL.len());
        assert_eq!(
            theme[&ThemeEntry::RuleApplied].fg.as_ref().unwrap().to_ansi_color(),
            AnsiColors::Magenta
        );
        assert_eq!(theme[&ThemeEntry::Warn].fg.as_ref().unwrap().to_ansi_color(), AnsiColors::Yellow);
    }
}

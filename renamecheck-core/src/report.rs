// renamecheck-core/src/report.rs
//! Rendering of batch results.
//!
//! Two shapes are produced: pretty JSON mirroring [`RunResult`], and a
//! line-oriented transcript. The transcript is built as typed lines so that
//! the CLI can color each kind without re-parsing text.

use serde::Serialize;
use std::path::Path;

use crate::application_record::RunResult;
use crate::config::RenameRule;

/// Output shape of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

impl ReportFormat {
    /// JSON when requested explicitly or when the destination ends in `.json`.
    pub fn for_output(json: bool, out_path: Option<&Path>) -> Self {
        let json_destination = out_path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if json || json_destination {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

/// Pretty JSON array of results. Non-ASCII text is kept verbatim.
pub fn render_json(results: &[RunResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// What a transcript line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Separator,
    Original,
    Final,
    AppliedHeader,
    RuleApplied,
    RuleFailed,
    NoRules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Builds the transcript for a batch, one block per sample.
pub fn transcript_lines(results: &[RunResult]) -> Vec<TranscriptLine> {
    let mut lines = Vec::new();
    for result in results {
        lines.push(TranscriptLine::new(LineKind::Separator, "---"));
        lines.push(TranscriptLine::new(LineKind::Original, format!("Original: {}", result.original)));
        lines.push(TranscriptLine::new(LineKind::Final, format!("Final: {}", result.transformed)));
        if result.applied.is_empty() {
            lines.push(TranscriptLine::new(LineKind::NoRules, "No rules applied"));
            continue;
        }
        lines.push(TranscriptLine::new(LineKind::AppliedHeader, "Applied rules:"));
        for record in &result.applied {
            let kind = if record.succeeded {
                LineKind::RuleApplied
            } else {
                LineKind::RuleFailed
            };
            lines.push(TranscriptLine::new(
                kind,
                format!(
                    "  {}: match={} -> repl={} -> {}",
                    record.rule_index, record.pattern, record.replacement, record.outcome
                ),
            ));
        }
    }
    lines
}

/// The plain transcript, lines joined with `\n`.
pub fn render_text(results: &[RunResult]) -> String {
    transcript_lines(results)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-rule activity across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummaryItem {
    pub rule_index: usize,
    pub pattern: String,
    pub replacement: String,
    /// Samples this rule changed.
    pub hits: usize,
    /// Samples on which this rule failed.
    pub failures: usize,
}

/// Counts hits and failures for every rule, including rules that never fired.
pub fn summarize_rules(rules: &[RenameRule], results: &[RunResult]) -> Vec<RuleSummaryItem> {
    let mut summary: Vec<RuleSummaryItem> = rules
        .iter()
        .enumerate()
        .map(|(position, rule)| RuleSummaryItem {
            rule_index: position + 1,
            pattern: rule.pattern.clone(),
            replacement: rule.replacement.clone(),
            hits: 0,
            failures: 0,
        })
        .collect();

    for record in results.iter().flat_map(|r| &r.applied) {
        let Some(item) = record.rule_index.checked_sub(1).and_then(|i| summary.get_mut(i)) else {
            continue;
        };
        if record.succeeded {
            item.hits += 1;
        } else {
            item.failures += 1;
        }
    }
    summary
}

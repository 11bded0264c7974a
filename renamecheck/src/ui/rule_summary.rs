//! Per-rule summary table printed after a run with `--summary`.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::io::{self, Write};

use renamecheck_core::RuleSummaryItem;

use super::output_format::styled;
use super::theme::{ThemeEntry, ThemeMap};

/// Builds the summary table. Cells are not colored.
pub fn build_table(summary: &[RuleSummaryItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Match", "Replace", "Hits", "Failures"]);

    for item in summary {
        table.add_row(vec![
            Cell::new(item.rule_index).set_alignment(CellAlignment::Right),
            Cell::new(&item.pattern),
            Cell::new(&item.replacement),
            Cell::new(item.hits).set_alignment(CellAlignment::Right),
            Cell::new(item.failures).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Prints the heading, the table and a one-line total.
pub fn print_summary<W: Write>(
    summary: &[RuleSummaryItem],
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled("Rule Summary:", ThemeEntry::Header, theme, supports_color))?;
    if summary.is_empty() {
        writeln!(writer, "{}", styled("No rename rules loaded.", ThemeEntry::Info, theme, supports_color))?;
        return Ok(());
    }
    writeln!(writer, "{}", build_table(summary))?;

    let hits: usize = summary.iter().map(|s| s.hits).sum();
    let failures: usize = summary.iter().map(|s| s.failures).sum();
    let idle = summary.iter().filter(|s| s.hits == 0 && s.failures == 0).count();
    let hits_text = styled(&hits.to_string(), ThemeEntry::SummaryHits, theme, supports_color);
    let failures_text = styled(&failures.to_string(), ThemeEntry::SummaryFailures, theme, supports_color);
    writeln!(
        writer,
        "{} rules, {} hits, {} failures, {} never fired",
        summary.len(),
        hits_text,
        failures_text,
        idle
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn item(rule_index: usize, pattern: &str, hits: usize, failures: usize) -> RuleSummaryItem {
        RuleSummaryItem {
            rule_index,
            pattern: pattern.to_string(),
            replacement: "x".to_string(),
            hits,
            failures,
        }
    }

    #[test]
    fn summary_lists_every_rule_and_totals() {
        let summary = vec![item(1, "0\\.5x", 3, 0), item(2, "(", 0, 4), item(3, "never", 0, 0)];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Rule Summary:"));
        assert!(text.contains("0\\.5x"));
        assert!(text.contains("never"));
        assert!(text.contains("3 rules, 3 hits, 4 failures, 1 never fired"));
    }

    #[test]
    fn empty_summary_is_reported() {
        let mut out = Vec::new();
        print_summary(&[], &mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No rename rules loaded."));
    }
}

//! Terminal presentation: theme, colored messages and transcript, summary table.

pub mod output_format;
pub mod rule_summary;
pub mod theme;

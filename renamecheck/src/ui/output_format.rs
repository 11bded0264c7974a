//! Colored stderr messages and the report transcript.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use renamecheck_core::report::TranscriptLine;

use super::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color of `entry` to `text` when color is enabled.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{prefix}{message}"), entry, theme, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Info, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Success, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "WARN: ", message, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "ERROR: ", message, ThemeEntry::Error, theme, supports_color)
}

/// Writes the transcript, one line per entry, with a trailing newline.
pub fn write_transcript<W: Write>(
    writer: &mut W,
    lines: &[TranscriptLine],
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", styled(&line.text, line.kind.into(), theme, supports_color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use renamecheck_core::report::LineKind;

    #[test]
    fn plain_output_has_no_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "WARN: careful\n");
    }

    #[test]
    fn colored_transcript_strips_back_to_plain_text() {
        let theme = ThemeStyle::default_theme_map();
        let lines = vec![
            TranscriptLine { kind: LineKind::Separator, text: "---".to_string() },
            TranscriptLine { kind: LineKind::RuleFailed, text: "  1: match=( -> repl=x -> compile error".to_string() },
        ];
        let mut out = Vec::new();
        write_transcript(&mut out, &lines, &theme, true).unwrap();
        assert!(out.contains(&0x1b));
        let plain = String::from_utf8(strip_ansi_escapes::strip(&out)).unwrap();
        assert_eq!(plain, "---\n  1: match=( -> repl=x -> compile error\n");
    }
}

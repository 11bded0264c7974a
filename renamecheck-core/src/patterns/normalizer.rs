//! normalizer.rs - Makes rule patterns portable and compiles them.
//!
//! Rule authors write code points as `\x{1F1E6}`. That brace form is
//! rewritten to the fixed-width `\uFFFF` / `\UFFFFFFFF` escapes, which every
//! supported engine accepts both inside and outside character classes.
//! Normalization always runs on the `regex` crate, independent of the engine
//! that finally compiles the pattern.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::engine::{CompiledMatcher, RegexCapability};
use crate::errors::PatternError;

lazy_static! {
    /// `\x{H...}` with one or more hex digits.
    static ref BRACE_HEX_ESCAPE: Regex =
        Regex::new(r"\\x\{([0-9A-Fa-f]+)\}").expect("brace hex escape pattern is valid");
}

/// Largest Unicode scalar value.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Rewrites every `\x{H...}` escape into `\uHHHH` (code points up to U+FFFF)
/// or `\UHHHHHHHH`, upper-cased and zero-padded to exactly that width.
///
/// Escapes whose value does not parse or lies beyond U+10FFFF are left as
/// written; the capability check or the engine reports them.
/// Borrows the input when there is nothing to rewrite.
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    BRACE_HEX_ESCAPE.replace_all(pattern, |caps: &Captures<'_>| match u32::from_str_radix(&caps[1], 16) {
        Ok(code) if code <= 0xFFFF => format!("\\u{code:04X}"),
        Ok(code) if code <= MAX_CODE_POINT => format!("\\U{code:08X}"),
        _ => caps[0].to_string(),
    })
}

/// Whether a normalized pattern still carries escapes the minimal engine
/// refuses: an unconverted `\x{..}` or a `\p{..}` property class.
pub fn requires_rich_engine(normalized: &str) -> bool {
    normalized.contains("\\x{") || normalized.contains("\\p{")
}

/// Normalizes `pattern`, applies the capability check and compiles it on
/// `capability`.
pub fn compile_pattern(
    capability: &dyn RegexCapability,
    pattern: &str,
) -> Result<Box<dyn CompiledMatcher>, PatternError> {
    let normalized = normalize_pattern(pattern);
    if normalized != pattern {
        debug!("Normalized pattern '{}' to '{}'", pattern, normalized);
    }

    if !capability.is_rich() && requires_rich_engine(&normalized) {
        return Err(PatternError::Capability {
            pattern: pattern.to_string(),
            engine: capability.name().to_string(),
        });
    }

    capability.compile(&normalized, pattern)
}

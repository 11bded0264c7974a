//! A `RegexCapability` backed by `fancy-regex`.
//!
//! Patterns without fancy features are delegated to the `regex` crate by
//! `fancy-regex` itself; lookaround and backreferences run on its
//! backtracking VM. A pattern that exceeds the backtrack limit surfaces as a
//! substitution error for that rule.
//! License: MIT OR APACHE 2.0

use fancy_regex::{Expander, Regex, RegexBuilder};

use crate::engine::{CompiledMatcher, RegexCapability, SubstitutionMode};
use crate::errors::{PatternError, SubstituteError};
use crate::patterns::validate_group_references;

/// Same default as `fancy-regex`.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct FancyEngine {
    backtrack_limit: usize,
}

impl Default for FancyEngine {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl FancyEngine {
    pub fn with_backtrack_limit(backtrack_limit: usize) -> Self {
        Self { backtrack_limit }
    }
}

impl RegexCapability for FancyEngine {
    fn name(&self) -> &'static str {
        "fancy-regex"
    }

    fn is_rich(&self) -> bool {
        true
    }

    // fancy-regex has no Unicode toggle; matching is always Unicode-aware.
    fn compile(&self, normalized: &str, original: &str) -> Result<Box<dyn CompiledMatcher>, PatternError> {
        let regex = RegexBuilder::new(normalized)
            .backtrack_limit(self.backtrack_limit)
            .build()
            .map_err(|e| PatternError::compile(original, &e.to_string()))?;
        Ok(Box::new(FancyMatcher { regex }))
    }
}

#[derive(Debug)]
struct FancyMatcher {
    regex: Regex,
}

impl CompiledMatcher for FancyMatcher {
    fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    fn substitute(&self, input: &str, replacement: &str, mode: SubstitutionMode) -> Result<String, SubstituteError> {
        let names: Vec<&str> = self.regex.capture_names().flatten().collect();
        validate_group_references(replacement, self.captures_len(), &names)?;

        let limit = mode.limit();
        let expander = Expander::default();
        let mut out = String::with_capacity(input.len());
        let mut last_end = 0;

        for (count, caps) in self.regex.captures_iter(input).enumerate() {
            if limit != 0 && count >= limit {
                break;
            }
            let caps = caps.map_err(|e| SubstituteError::Engine(e.to_string()))?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&input[last_end..whole.start()]);
            expander.append_expansion(&mut out, replacement, &caps);
            last_end = whole.end();
        }
        out.push_str(&input[last_end..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(pattern: &str) -> Box<dyn CompiledMatcher> {
        FancyEngine::default().compile(pattern, pattern).unwrap()
    }

    #[test]
    fn supports_lookahead() {
        let m = matcher(r"\d+(?=倍)");
        assert_eq!(m.substitute("5倍率", "x${0}", SubstitutionMode::All).unwrap(), "x5倍率");
    }

    #[test]
    fn replaces_all_or_first() {
        let m = matcher(r"(?<=a)n");
        assert_eq!(m.substitute("banana", "N", SubstitutionMode::All).unwrap(), "baNaNa");
        assert_eq!(m.substitute("banana", "N", SubstitutionMode::FirstOnly).unwrap(), "baNana");
    }

    #[test]
    fn expands_groups_and_keeps_unmatched_text() {
        let m = matcher(r"(\p{Han}+)(\d+)");
        assert_eq!(m.substitute("🇯🇵 日本04", "${1} ${2}", SubstitutionMode::All).unwrap(), "🇯🇵 日本 04");
    }

    #[test]
    fn empty_matches_terminate() {
        let m = matcher("x*");
        assert_eq!(m.substitute("ab", "-", SubstitutionMode::All).unwrap(), "-a-b-");
    }

    #[test]
    fn undefined_group_is_a_substitution_error() {
        let m = matcher("a");
        assert!(matches!(
            m.substitute("a", "${2}", SubstitutionMode::All),
            Err(SubstituteError::InvalidGroupReference { group: 2, .. })
        ));
    }

    #[test]
    fn named_groups_must_exist() {
        let m = matcher(r"(?<cc>[A-Z]+)(?=-)");
        assert_eq!(m.substitute("HK-01", "[$cc]", SubstitutionMode::All).unwrap(), "[HK]-01");
        assert_eq!(
            m.substitute("HK-01", "${region}", SubstitutionMode::All),
            Err(SubstituteError::UnknownGroupName("region".to_string()))
        );
    }

    #[test]
    fn backtrack_limit_is_a_substitution_error() {
        let engine = FancyEngine::with_backtrack_limit(10);
        let m = engine.compile(r"(a+)+(?=b)c", r"(a+)+(?=b)c").unwrap();
        let err = m.substitute(&"a".repeat(30), "x", SubstitutionMode::All).unwrap_err();
        assert!(matches!(err, SubstituteError::Engine(_)));
    }
}

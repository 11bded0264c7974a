//! A `RegexCapability` backed by the `regex` crate.
//!
//! This is the minimal engine: linear-time matching, no lookaround and no
//! backreferences inside patterns.
//! License: MIT OR APACHE 2.0

use regex::{Regex, RegexBuilder};

use crate::engine::{CompiledMatcher, RegexCapability, SubstitutionMode};
use crate::errors::{PatternError, SubstituteError};
use crate::patterns::validate_group_references;

/// Upper bound for a single compiled program.
const SIZE_LIMIT: usize = 10 * (1 << 20);

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEngine;

impl RegexCapability for StandardEngine {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn is_rich(&self) -> bool {
        false
    }

    fn compile(&self, normalized: &str, original: &str) -> Result<Box<dyn CompiledMatcher>, PatternError> {
        let regex = RegexBuilder::new(normalized)
            .unicode(true)
            .size_limit(SIZE_LIMIT)
            .build()
            .map_err(|e| PatternError::compile(original, &e.to_string()))?;
        Ok(Box::new(StandardMatcher { regex }))
    }
}

#[derive(Debug)]
struct StandardMatcher {
    regex: Regex,
}

impl CompiledMatcher for StandardMatcher {
    fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    fn substitute(&self, input: &str, replacement: &str, mode: SubstitutionMode) -> Result<String, SubstituteError> {
        let names: Vec<&str> = self.regex.capture_names().flatten().collect();
        validate_group_references(replacement, self.captures_len(), &names)?;
        Ok(self.regex.replacen(input, mode.limit(), replacement).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(pattern: &str) -> Box<dyn CompiledMatcher> {
        StandardEngine.compile(pattern, pattern).unwrap()
    }

    #[test]
    fn replaces_all_or_first() {
        let m = matcher("a");
        assert_eq!(m.substitute("banana", "o", SubstitutionMode::All).unwrap(), "bonono");
        assert_eq!(m.substitute("banana", "o", SubstitutionMode::FirstOnly).unwrap(), "bonana");
    }

    #[test]
    fn expands_braced_groups() {
        let m = matcher(r"(\w+)-(\d+)");
        assert_eq!(m.captures_len(), 3);
        assert_eq!(m.substitute("HK-01", "${2}a${1}", SubstitutionMode::All).unwrap(), "01aHK");
    }

    #[test]
    fn empty_matches_terminate() {
        let m = matcher("x*");
        assert_eq!(m.substitute("ab", "-", SubstitutionMode::All).unwrap(), "-a-b-");
    }

    #[test]
    fn undefined_group_is_a_substitution_error() {
        let m = matcher("a");
        let err = m.substitute("a", "${1}", SubstitutionMode::All).unwrap_err();
        assert_eq!(err, SubstituteError::InvalidGroupReference { group: 1, defined: 0 });
    }

    #[test]
    fn named_groups_must_exist() {
        let m = matcher(r"(?P<cc>[A-Z]+)-(\d+)");
        assert_eq!(m.substitute("HK-01", "${cc}$cc", SubstitutionMode::All).unwrap(), "HKHK");
        let err = m.substitute("HK-01", "$HK", SubstitutionMode::All).unwrap_err();
        assert_eq!(err, SubstituteError::UnknownGroupName("HK".to_string()));
    }

    #[test]
    fn lookaround_does_not_compile() {
        assert!(StandardEngine.compile("a(?=b)", "a(?=b)").is_err());
    }
}

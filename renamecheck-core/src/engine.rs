// renamecheck-core/src/engine.rs
//! Defines the pluggable regex capability the rule applier is written against.
//!
//! A `RegexCapability` compiles normalized patterns into `CompiledMatcher`s;
//! a matcher performs one substitution pass over an input. Concrete
//! implementations live in [`crate::engines`]. The applier never names a
//! concrete regex crate, so the engine can be swapped at process start.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use crate::errors::{PatternError, SubstituteError};

/// How many non-overlapping matches a single rule may rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubstitutionMode {
    /// Every non-overlapping match, left to right.
    #[default]
    All,
    /// At most the first match.
    FirstOnly,
}

impl SubstitutionMode {
    /// Maximum number of replacements, where `0` means unbounded.
    pub fn limit(self) -> usize {
        match self {
            SubstitutionMode::All => 0,
            SubstitutionMode::FirstOnly => 1,
        }
    }
}

/// A regex engine able to compile rename patterns.
pub trait RegexCapability: Send + Sync + fmt::Debug {
    /// Short engine name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// `true` for engines supporting PCRE-style extensions (lookaround,
    /// backreferences inside patterns, `\p{..}` classes as the rule authors
    /// expect them).
    fn is_rich(&self) -> bool;

    /// Compiles an already normalized pattern with Unicode-aware semantics.
    ///
    /// `original` is the pattern text as written in the config and is only
    /// used for error reporting.
    fn compile(&self, normalized: &str, original: &str) -> Result<Box<dyn CompiledMatcher>, PatternError>;
}

/// A compiled pattern bound to the engine that produced it.
pub trait CompiledMatcher: Send + Sync + fmt::Debug {
    /// Number of capture groups, counting the implicit whole-match group 0.
    fn captures_len(&self) -> usize;

    /// Replaces matches in `input` with the engine-native `replacement`
    /// template, bounded by `mode`. Returns the input unchanged (as a new
    /// string) when nothing matches.
    fn substitute(&self, input: &str, replacement: &str, mode: SubstitutionMode) -> Result<String, SubstituteError>;
}

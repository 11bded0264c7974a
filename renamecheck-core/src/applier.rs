//! applier.rs - Applies an ordered rename rule list to one string.
//!
//! Every rule is attempted exactly once, in list order, against the output
//! of the rules before it. A rule that leaves the string unchanged is not
//! recorded; a rule that fails to compile or substitute is recorded as a
//! failure and treated as a no-op.
//!
//! Compile outcomes, failures included, are cached per pattern string for
//! the lifetime of a `RuleApplier`, so a batch compiles each distinct
//! pattern once.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::application_record::ApplicationRecord;
use crate::config::RenameRule;
use crate::engine::{CompiledMatcher, RegexCapability, SubstitutionMode};
use crate::errors::PatternError;
use crate::patterns::{compile_pattern, translate_replacement};

type CompileOutcome = Result<Box<dyn CompiledMatcher>, PatternError>;

/// Applies rename rules on a chosen engine and substitution mode.
pub struct RuleApplier<'e> {
    engine: &'e dyn RegexCapability,
    mode: SubstitutionMode,
    cache: RwLock<HashMap<String, Arc<CompileOutcome>>>,
}

impl fmt::Debug for RuleApplier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleApplier")
            .field("engine", &self.engine.name())
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<'e> RuleApplier<'e> {
    pub fn new(engine: &'e dyn RegexCapability, mode: SubstitutionMode) -> Self {
        Self {
            engine,
            mode,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Runs `rules` over `input`, returning the final string and the records
    /// of every rule that changed it or failed.
    pub fn apply(&self, input: &str, rules: &[RenameRule]) -> (String, Vec<ApplicationRecord>) {
        let mut result = input.to_string();
        let mut records = Vec::new();

        for (position, rule) in rules.iter().enumerate() {
            let rule_index = position + 1;

            let compiled = self.compiled(&rule.pattern);
            let matcher = match &*compiled {
                Ok(matcher) => matcher,
                Err(e) => {
                    debug!("Rule {} skipped, pattern did not compile: {}", rule_index, e);
                    records.push(ApplicationRecord::failed(rule_index, rule, format!("compile error: {e}")));
                    continue;
                }
            };

            let replacement = translate_replacement(&rule.replacement);
            let substituted = match matcher.substitute(&result, &replacement, self.mode) {
                Ok(substituted) => substituted,
                Err(e) => {
                    debug!("Rule {} skipped, substitution failed: {}", rule_index, e);
                    records.push(ApplicationRecord::failed(rule_index, rule, format!("sub error: {e}")));
                    continue;
                }
            };

            if substituted != result {
                debug!("Rule {} rewrote '{}' to '{}'", rule_index, result, substituted);
                records.push(ApplicationRecord::changed(rule_index, rule, substituted.clone()));
                result = substituted;
            }
        }

        (result, records)
    }

    /// Gets a compile outcome from the cache or compiles the pattern.
    fn compiled(&self, pattern: &str) -> Arc<CompileOutcome> {
        {
            let cache = self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(outcome) = cache.get(pattern) {
                return Arc::clone(outcome);
            }
        }

        let outcome = Arc::new(compile_pattern(self.engine, pattern));
        if let Err(e) = &*outcome {
            warn!("Pattern '{}' cannot be used with engine '{}': {}", pattern, self.engine.name(), e);
        }
        self.cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(pattern.to_string(), Arc::clone(&outcome));
        outcome
    }
}

/// One-shot convenience wrapper around [`RuleApplier::apply`].
pub fn apply_rules(
    input: &str,
    rules: &[RenameRule],
    engine: &dyn RegexCapability,
    mode: SubstitutionMode,
) -> (String, Vec<ApplicationRecord>) {
    RuleApplier::new(engine, mode).apply(input, rules)
}

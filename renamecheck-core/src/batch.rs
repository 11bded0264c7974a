// renamecheck-core/src/batch.rs
//! Runs the rule applier over a list of samples.
//!
//! One `RuleApplier` (and so one compile cache) serves the whole batch.
//! Samples are processed in input order and each produces exactly one
//! `RunResult`.

use log::info;

use crate::applier::RuleApplier;
use crate::application_record::RunResult;
use crate::config::RenameRule;
use crate::engine::{RegexCapability, SubstitutionMode};

/// Applies `rules` to every sample and collects one result per sample.
///
/// # Arguments
///
/// * `samples` - Node names to rewrite, in report order.
/// * `rules` - The extracted rename rules, in declared order.
/// * `engine` - The regex capability selected at start-up.
/// * `mode` - Run-wide substitution mode.
pub fn run_batch<S: AsRef<str>>(
    samples: &[S],
    rules: &[RenameRule],
    engine: &dyn RegexCapability,
    mode: SubstitutionMode,
) -> Vec<RunResult> {
    info!(
        "Applying {} rules to {} samples with engine '{}' ({:?}).",
        rules.len(),
        samples.len(),
        engine.name(),
        mode
    );

    let applier = RuleApplier::new(engine, mode);
    let results: Vec<RunResult> = samples
        .iter()
        .map(|sample| {
            let original = sample.as_ref();
            let (transformed, applied) = applier.apply(original, rules);
            RunResult {
                original: original.to_string(),
                transformed,
                applied,
            }
        })
        .collect();

    let changed = results.iter().filter(|r| r.original != r.transformed).count();
    let failing = results.iter().filter(|r| r.failures().next().is_some()).count();
    info!(
        "Batch finished: {} of {} samples renamed, {} with rule failures.",
        changed,
        results.len(),
        failing
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::standard_engine::StandardEngine;

    #[test]
    fn one_result_per_sample_in_order() {
        let rules = vec![RenameRule::new("(\\d+)$", "#$1")];
        let samples = ["HK 01", "no digits", "JP 2"];
        let results = run_batch(&samples, &rules, &StandardEngine, SubstitutionMode::All);

        let transformed: Vec<_> = results.iter().map(|r| r.transformed.as_str()).collect();
        assert_eq!(transformed, vec!["HK #01", "no digits", "JP #2"]);
        assert!(results[1].applied.is_empty());
        assert_eq!(results[2].original, "JP 2");
    }

    #[test]
    fn failures_do_not_abort_other_samples() {
        let rules = vec![RenameRule::new("(", "x"), RenameRule::new("a", "b")];
        let samples = vec!["a".to_string(), "aa".to_string()];
        let results = run_batch(samples.as_slice(), &rules, &StandardEngine, SubstitutionMode::FirstOnly);
        assert_eq!(results[0].transformed, "b");
        assert_eq!(results[1].transformed, "ba");
        assert!(results.iter().all(|r| r.failures().count() == 1));
    }
}

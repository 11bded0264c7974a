//! Post-run verification of the multiplier renames.
//!
//! A fixed set of sample names with known expected output is looked up in
//! the batch results. Names that are not part of the batch are reported as
//! missing (a warning, not a failure); any differing output is a mismatch.

use log::{debug, warn};
use std::collections::HashMap;

use crate::application_record::RunResult;

/// `(original, expected)` pairs checked after every run.
pub const BUILTIN_EXPECTATIONS: &[(&str, &str)] = &[
    ("🇩🇪 德国-V6|01 0.5x", "🇩🇪 德国-V6|01 [x0.5]"),
    ("🇭🇰 香港-V6|05 0.5x", "🇭🇰 香港-V6|05 [x0.5]"),
    ("🇳🇱 荷兰-V6|01 0.5x", "🇳🇱 荷兰-V6|01 [x0.5]"),
    ("🇭🇰 [CN]HK专线01-【5倍率】", "🇭🇰 [CN]HK专线01-[x5]"),
    ("🇸🇬 [CN]SG专线01-【5倍率】", "🇸🇬 [CN]SG专线01-[x5]"),
    ("🇹🇼 [CN]TW专线01-【5倍率】", "🇹🇼 [CN]TW专线01-[x5]"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub original: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfCheckReport {
    /// Expected originals not present in the batch.
    pub missing: Vec<String>,
    pub mismatches: Vec<Mismatch>,
}

impl SelfCheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks `expectations` against `results`; a later result for the same
/// original replaces an earlier one.
pub fn run_self_check(results: &[RunResult], expectations: &[(&str, &str)]) -> SelfCheckReport {
    let by_original: HashMap<&str, &str> = results
        .iter()
        .map(|r| (r.original.as_str(), r.transformed.as_str()))
        .collect();

    let mut report = SelfCheckReport::default();
    for (original, expected) in expectations {
        match by_original.get(original) {
            None => {
                warn!("Self-check case not found in samples: {}", original);
                report.missing.push(original.to_string());
            }
            Some(actual) if actual != expected => {
                debug!("Self-check mismatch for '{}': got '{}'", original, actual);
                report.mismatches.push(Mismatch {
                    original: original.to_string(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::default_samples;

    fn result(original: &str, transformed: &str) -> RunResult {
        RunResult {
            original: original.to_string(),
            transformed: transformed.to_string(),
            applied: vec![],
        }
    }

    #[test]
    fn passes_when_all_expectations_hold() {
        let results = vec![result("a", "A"), result("b", "B")];
        let report = run_self_check(&results, &[("a", "A"), ("b", "B")]);
        assert!(report.passed());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn missing_cases_are_not_failures() {
        let report = run_self_check(&[result("a", "A")], &[("a", "A"), ("z", "Z")]);
        assert!(report.passed());
        assert_eq!(report.missing, vec!["z".to_string()]);
    }

    #[test]
    fn mismatch_fails_and_last_result_wins() {
        let results = vec![result("a", "A"), result("a", "wrong")];
        let report = run_self_check(&results, &[("a", "A")]);
        assert!(!report.passed());
        assert_eq!(report.mismatches[0].actual, "wrong");
    }

    #[test]
    fn every_mismatch_is_reported() {
        let results = vec![result("a", "x"), result("b", "B"), result("c", "y")];
        let report = run_self_check(&results, &[("a", "A"), ("b", "B"), ("c", "C")]);
        assert!(!report.passed());
        let originals: Vec<_> = report.mismatches.iter().map(|m| m.original.as_str()).collect();
        assert_eq!(originals, vec!["a", "c"]);
    }

    #[test]
    fn builtin_cases_are_in_default_samples() {
        let samples = default_samples();
        for (original, _) in BUILTIN_EXPECTATIONS {
            assert!(samples.iter().any(|s| s == original), "missing {original}");
        }
    }
}

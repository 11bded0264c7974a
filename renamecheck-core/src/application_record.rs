// renamecheck-core/src/application_record.rs
//! Data structures describing what the rule applier did to each sample.
//!
//! Field names on the wire (`match`, `replace`, `ok`, `result`) are the ones
//! consumers of the JSON report already read.

use serde::{Deserialize, Serialize};

use crate::config::RenameRule;

/// The audit entry for one rule that changed, or failed on, one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// 1-based position of the rule in the extracted list.
    pub rule_index: usize,
    #[serde(rename = "match")]
    pub pattern: String,
    #[serde(rename = "replace")]
    pub replacement: String,
    /// `false` when the rule failed to compile or substitute.
    #[serde(rename = "ok")]
    pub succeeded: bool,
    /// The new string on success, the failure reason otherwise.
    #[serde(rename = "result")]
    pub outcome: String,
}

impl ApplicationRecord {
    pub fn changed(rule_index: usize, rule: &RenameRule, new_value: String) -> Self {
        Self {
            rule_index,
            pattern: rule.pattern.clone(),
            replacement: rule.replacement.clone(),
            succeeded: true,
            outcome: new_value,
        }
    }

    pub fn failed(rule_index: usize, rule: &RenameRule, reason: String) -> Self {
        Self {
            rule_index,
            pattern: rule.pattern.clone(),
            replacement: rule.replacement.clone(),
            succeeded: false,
            outcome: reason,
        }
    }
}

/// Everything the applier produced for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub original: String,
    pub transformed: String,
    /// Rules that changed the string or failed, in rule order.
    pub applied: Vec<ApplicationRecord>,
}

impl RunResult {
    pub fn failures(&self) -> impl Iterator<Item = &ApplicationRecord> {
        self.applied.iter().filter(|r| !r.succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_report_field_names() {
        let rule = RenameRule::new("0\\.5x", "[x0.5]");
        let result = RunResult {
            original: "01 0.5x".to_string(),
            transformed: "01 [x0.5]".to_string(),
            applied: vec![ApplicationRecord::changed(1, &rule, "01 [x0.5]".to_string())],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "original": "01 0.5x",
                "transformed": "01 [x0.5]",
                "applied": [{
                    "rule_index": 1,
                    "match": "0\\.5x",
                    "replace": "[x0.5]",
                    "ok": true,
                    "result": "01 [x0.5]"
                }]
            })
        );
    }
}

// renamecheck-core/src/lib.rs
//! # renamecheck core library
//!
//! `renamecheck-core` checks the node rename rules of a subscription-converter
//! preference file against a list of sample node names. It loads the
//! ordered `node_pref.rename_node` rules, applies them one after the other to
//! every sample through a pluggable regex capability, and records what each
//! rule did.
//!
//! The library does no terminal I/O. Rendering to a terminal, exit codes and
//! argument parsing live in the `renamecheck` binary crate.
//!
//! ## Modules
//!
//! * `config`: Loads TOML/YAML preference files and extracts [`RenameRule`]s.
//! * `engine`: Defines the [`RegexCapability`] and [`CompiledMatcher`] traits.
//! * `engines`: `regex`-backed and `fancy-regex`-backed capabilities, plus [`select_engine`].
//! * `patterns`: Escape normalization and replacement template translation.
//! * `applier`: Sequential rule application with a per-run compile cache.
//! * `batch`: Runs the applier over every sample.
//! * `samples`: Built-in and file-based sample lists.
//! * `report`: JSON and transcript rendering, per-rule summaries.
//! * `self_check`: Known-good expectations for the multiplier renames.
//! * `errors`: Error types shared by the modules above.
//!
//! ## Usage Example
//!
//! ```rust
//! use renamecheck_core::{run_batch, select_engine, EngineChoice, RenameRule, SubstitutionMode};
//!
//! let rules = vec![RenameRule::new(r"0\.5x", "[x0.5]")];
//! let engine = select_engine(EngineChoice::Standard).unwrap();
//! let results = run_batch(&["DE-V6|01 0.5x"], &rules, engine.as_ref(), SubstitutionMode::All);
//! assert_eq!(results[0].transformed, "DE-V6|01 [x0.5]");
//! ```
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod application_record;
pub mod applier;
pub mod batch;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod patterns;
pub mod report;
pub mod samples;
pub mod self_check;

/// Rule loading.
pub use config::{ConfigFormat, RenameConfig, RenameRule};

/// The capability traits and the substitution mode.
pub use engine::{CompiledMatcher, RegexCapability, SubstitutionMode};

pub use engines::{rich_engine_available, select_engine, EngineChoice};
pub use errors::{ConfigError, EngineUnavailable, PatternError, SubstituteError};

/// Applying rules and the records it produces.
pub use applier::{apply_rules, RuleApplier};
pub use application_record::{ApplicationRecord, RunResult};
pub use batch::run_batch;

pub use report::{render_json, render_text, summarize_rules, ReportFormat, RuleSummaryItem};
pub use samples::{default_samples, load_samples, SampleSource};
pub use self_check::{run_self_check, SelfCheckReport, BUILTIN_EXPECTATIONS};

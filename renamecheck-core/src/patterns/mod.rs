//! Pattern and replacement preparation.
//!
//! Rename rules are written for PCRE-flavoured engines. Before a rule reaches
//! a [`RegexCapability`](crate::engine::RegexCapability), its pattern goes
//! through [`normalizer`] (portable escapes, capability check, compilation)
//! and its replacement template through [`replacement`] (backreference
//! syntax).

pub mod normalizer;
pub mod replacement;

pub use normalizer::{compile_pattern, normalize_pattern, requires_rich_engine};
pub use replacement::{translate_replacement, validate_group_references};

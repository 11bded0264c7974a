//! replacement.rs - Translates rename templates to the engines' replacement syntax.
//!
//! Templates use `$1`, `$2`, ... for capture groups. The `regex` and
//! `fancy-regex` engines read `$1a` as a group *named* `1a`, so numbered
//! references are rewritten to the braced `${1}` form. Nothing else in the
//! template is touched: `$name` and `${name}` stay named-group references and
//! `$$` stays a literal `$`.
//!
//! A reference to a group the pattern does not define, numbered or named, is
//! a substitution failure rather than an empty expansion.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::errors::SubstituteError;

lazy_static! {
    static ref DOLLAR_BACKREF: Regex = Regex::new(r"\$(\d+)").expect("dollar backreference pattern is valid");
}

/// Rewrites every `$N` into `${N}`.
pub fn translate_replacement(template: &str) -> Cow<'_, str> {
    DOLLAR_BACKREF.replace_all(template, |caps: &Captures<'_>| format!("${{{}}}", &caps[1]))
}

/// Fails when a translated template references a group the pattern does not
/// define. `captures_len` counts group 0; `group_names` lists the named
/// groups of the pattern.
pub fn validate_group_references(
    template: &str,
    captures_len: usize,
    group_names: &[&str],
) -> Result<(), SubstituteError> {
    for reference in group_references(template) {
        match reference {
            GroupReference::Numbered(group) if group >= captures_len => {
                return Err(SubstituteError::InvalidGroupReference {
                    group,
                    defined: captures_len.saturating_sub(1),
                });
            }
            GroupReference::Named(name) if !group_names.contains(&name) => {
                return Err(SubstituteError::UnknownGroupName(name.to_string()));
            }
            _ => {}
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupReference<'t> {
    Numbered(usize),
    Named(&'t str),
}

/// Group references as the engines read them: `${name}`, or `$name` with the
/// longest run of `[_0-9A-Za-z]`. `$$` and a `$` not followed by a name are
/// literal.
fn group_references(template: &str) -> Vec<GroupReference<'_>> {
    let mut references = Vec::new();
    let mut rest = template;
    while let Some(at) = rest.find('$') {
        rest = &rest[at + 1..];
        if let Some(after) = rest.strip_prefix('$') {
            rest = after;
            continue;
        }
        let name = if let Some(body) = rest.strip_prefix('{') {
            let Some(close) = body.find('}') else {
                continue;
            };
            rest = &body[close + 1..];
            &body[..close]
        } else {
            let len = rest
                .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
                .unwrap_or(rest.len());
            let name = &rest[..len];
            rest = &rest[len..];
            name
        };
        if name.is_empty() {
            continue;
        }
        if name.bytes().all(|b| b.is_ascii_digit()) {
            references.push(GroupReference::Numbered(name.parse().unwrap_or(usize::MAX)));
        } else {
            references.push(GroupReference::Named(name));
        }
    }
    references
}

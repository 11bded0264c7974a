// renamecheck-core/src/engines/mod.rs
//! Concrete `RegexCapability` implementations and engine selection.
//!
//! * `standard_engine`: the `regex` crate. Always compiled in; it is the
//!   minimal capability and also powers pattern normalization.
//! * `fancy_engine`: `fancy-regex`, built with the default `fancy` feature.
//!   Adds lookaround and in-pattern backreferences on top of `regex`.
//!
//! Pick one with [`select_engine`] once at process start.

pub mod standard_engine;

#[cfg(feature = "fancy")]
pub mod fancy_engine;

use log::debug;

use crate::engine::RegexCapability;
use crate::errors::EngineUnavailable;

/// Which engine the caller asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineChoice {
    /// The rich engine when compiled in, otherwise the standard one.
    #[default]
    Auto,
    /// `fancy-regex`; unavailable without the `fancy` feature.
    Fancy,
    /// The `regex` crate.
    Standard,
}

/// Whether the rich engine was compiled into this build.
pub fn rich_engine_available() -> bool {
    cfg!(feature = "fancy")
}

/// Instantiates the requested engine.
pub fn select_engine(choice: EngineChoice) -> Result<Box<dyn RegexCapability>, EngineUnavailable> {
    let engine: Box<dyn RegexCapability> = match choice {
        EngineChoice::Standard => Box::new(standard_engine::StandardEngine),
        EngineChoice::Auto | EngineChoice::Fancy => match rich_engine() {
            Some(engine) => engine,
            None if choice == EngineChoice::Auto => Box::new(standard_engine::StandardEngine),
            None => return Err(EngineUnavailable("fancy-regex".to_string())),
        },
    };
    debug!("Selected regex engine '{}' for choice {:?}.", engine.name(), choice);
    Ok(engine)
}

#[cfg(feature = "fancy")]
fn rich_engine() -> Option<Box<dyn RegexCapability>> {
    Some(Box::new(fancy_engine::FancyEngine::default()))
}

#[cfg(not(feature = "fancy"))]
fn rich_engine() -> Option<Box<dyn RegexCapability>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_always_available() {
        let engine = select_engine(EngineChoice::Standard).unwrap();
        assert_eq!(engine.name(), "regex");
        assert!(!engine.is_rich());
    }

    #[test]
    fn auto_prefers_rich_engine_when_built() {
        let engine = select_engine(EngineChoice::Auto).unwrap();
        assert_eq!(engine.is_rich(), rich_engine_available());
    }

    #[test]
    fn fancy_choice_matches_build_features() {
        assert_eq!(select_engine(EngineChoice::Fancy).is_ok(), rich_engine_available());
    }
}

//! Error taxonomy for the landing page client.
//!
//! Most missing-element conditions are absorbed as no-ops; these variants
//! exist for the cases the caller opted into seeing (`MissingTargetPolicy::Fail`)
//! and for load-time problems with the embedded dictionaries or config.

/// Errors surfaced by catalog loading, binding construction, and rewrites.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// A bound DOM target could not be found at rewrite time.
    #[error("missing target: {selector}[{index}]")]
    MissingTarget { selector: String, index: usize },

    /// A DOM collection does not have one node per dictionary entry.
    #[error("length mismatch for {slot} ({selector}): expected {expected}, found {found}")]
    LengthMismatch { slot: &'static str, selector: &'static str, expected: usize, found: usize },

    /// The `tr` and `en` dictionaries disagree on the length of a list key.
    #[error("dictionary parity broken for {key}: tr has {tr}, en has {en}")]
    DictionaryParity { key: &'static str, tr: usize, en: usize },

    /// An embedded locale file failed to parse.
    #[error("locale {language} failed to parse: {source}")]
    Locale {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A `data-*` configuration attribute held an unusable value.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A browser DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
}

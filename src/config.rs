//! Page configuration parsed from `data-*` attributes on `<body>`.
//!
//! Optional:
//! - `data-lang`: initial language, `tr` (default) or `en`
//! - `data-scroll-offset`: fixed-header compensation in pixels, default 70
//! - `data-fade-ms`: delay before rewriting text on a language switch, default 200
//! - `data-missing-targets`: `skip` (default) or `fail`

use crate::consts::{FADE_DELAY_MS, SCROLL_OFFSET_PX};
use crate::dom::Dom;
use crate::error::LandingError;
use crate::i18n::Language;

/// What to do when a bound element is absent from the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingTargetPolicy {
    /// Leave that piece of text alone and carry on with the rest.
    #[default]
    Skip,
    /// Stop and report [`LandingError::MissingTarget`] / [`LandingError::LengthMismatch`].
    Fail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    pub initial_language: Language,
    pub scroll_offset_px: f64,
    pub fade_delay_ms: u32,
    pub missing_targets: MissingTargetPolicy,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            initial_language: Language::Tr,
            scroll_offset_px: SCROLL_OFFSET_PX,
            fade_delay_ms: FADE_DELAY_MS,
            missing_targets: MissingTargetPolicy::Skip,
        }
    }
}

impl LandingConfig {
    /// Build config from the attributes on the document's `<body>`.
    pub fn from_dom<D: Dom + ?Sized>(dom: &D) -> (Self, Vec<LandingError>) {
        Self::from_attributes(|name| dom.body_attribute(name))
    }

    /// Build config from any attribute source.
    ///
    /// Absent attributes take their defaults. An attribute with an unusable
    /// value also keeps its default and is reported in the returned list;
    /// the other attributes are still applied.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<LandingError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = lookup("data-lang") {
            keep(&mut config.initial_language, raw.parse(), &mut rejected);
        }
        if let Some(raw) = lookup("data-scroll-offset") {
            keep(&mut config.scroll_offset_px, parse_offset(&raw), &mut rejected);
        }
        if let Some(raw) = lookup("data-fade-ms") {
            keep(&mut config.fade_delay_ms, parse_delay(&raw), &mut rejected);
        }
        if let Some(raw) = lookup("data-missing-targets") {
            keep(&mut config.missing_targets, parse_policy(&raw), &mut rejected);
        }

        (config, rejected)
    }
}

fn keep<T>(field: &mut T, parsed: Result<T, LandingError>, rejected: &mut Vec<LandingError>) {
    match parsed {
        Ok(value) => *field = value,
        Err(err) => rejected.push(err),
    }
}

fn parse_offset(raw: &str) -> Result<f64, LandingError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LandingError::Config(format!("invalid data-scroll-offset: {raw}"))),
    }
}

fn parse_delay(raw: &str) -> Result<u32, LandingError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| LandingError::Config(format!("invalid data-fade-ms: {raw}")))
}

fn parse_policy(raw: &str) -> Result<MissingTargetPolicy, LandingError> {
    match raw.trim() {
        "skip" => Ok(MissingTargetPolicy::Skip),
        "fail" => Ok(MissingTargetPolicy::Fail),
        other => Err(LandingError::Config(format!(
            "unsupported data-missing-targets '{other}' (expected 'skip' or 'fail')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

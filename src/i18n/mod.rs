//! Translation dictionaries for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships exactly two dictionaries, Turkish and English, embedded as
//! JSON under `locales/`. They are parsed once at startup into a [`Catalog`],
//! which refuses to build if the two disagree on the length of any list, so
//! every positional rewrite has a string for every node in both languages.

pub mod bindings;


use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    ABOUT_TEXT_SELECTOR, ABOUT_TITLE_SELECTOR, CONTACT_TITLE_SELECTOR, DOWNLOAD_BUTTONS_SELECTOR,
    DOWNLOAD_TITLE_SELECTOR, FEATURE_ITEMS_SELECTOR, FEATURES_TITLE_SELECTOR, HERO_BUTTON_SELECTOR,
    HERO_TEXT_SELECTOR, HERO_TITLE_SELECTOR, NEWS_ITEMS_SELECTOR, NEWS_TITLE_SELECTOR,
    REVIEW_ITEMS_SELECTOR, REVIEWS_TITLE_SELECTOR,
};
use crate::error::LandingError;

const TR_JSON: &str = include_str!("../../locales/tr.json");
const EN_JSON: &str = include_str!("../../locales/en.json");

/// Display language of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// Two-letter code, as used in `data-lang`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::Tr => Language::En,
            Language::En => Language::Tr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(LandingError::Config(format!("unknown language '{other}' (expected 'tr' or 'en')"))),
        }
    }
}

/// All page text for one language.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dictionary {
    pub hero_title: String,
    pub hero_text: String,
    pub hero_btn: String,
    pub features_title: String,
    pub features: Vec<String>,
    pub about_title: String,
    pub about_text: String,
    pub download_title: String,
    pub download_buttons: Vec<String>,
    pub reviews_title: String,
    pub reviews: Vec<String>,
    pub news_title: String,
    pub news: Vec<String>,
    pub contact_title: String,
}

impl Dictionary {
    /// Parse a dictionary from its JSON form.
    pub fn from_json(language: Language, raw: &str) -> Result<Self, LandingError> {
        serde_json::from_str(raw).map_err(|source| LandingError::Locale { language: language.code(), source })
    }

    /// The items stored under a list key.
    #[must_use]
    pub fn list(&self, key: ListKey) -> &[String] {
        match key {
            ListKey::Features => &self.features,
            ListKey::DownloadButtons => &self.download_buttons,
            ListKey::Reviews => &self.reviews,
            ListKey::News => &self.news,
        }
    }

    /// The string that belongs in `slot`, if the dictionary has one.
    #[must_use]
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        let text = match slot {
            TextSlot::HeroTitle => &self.hero_title,
            TextSlot::HeroText => &self.hero_text,
            TextSlot::HeroButton => &self.hero_btn,
            TextSlot::FeaturesTitle => &self.features_title,
            TextSlot::AboutTitle => &self.about_title,
            TextSlot::AboutText => &self.about_text,
            TextSlot::DownloadTitle => &self.download_title,
            TextSlot::ReviewsTitle => &self.reviews_title,
            TextSlot::NewsTitle => &self.news_title,
            TextSlot::ContactTitle => &self.contact_title,
            TextSlot::Item(key, index) => return self.list(key).get(index).map(String::as_str),
        };
        Some(text.as_str())
    }
}

/// Dictionary keys whose value is an ordered list of strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKey {
    Features,
    DownloadButtons,
    Reviews,
    News,
}

impl ListKey {
    pub const ALL: [ListKey; 4] = [ListKey::Features, ListKey::DownloadButtons, ListKey::Reviews, ListKey::News];

    /// Key name as it appears in the locale files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ListKey::Features => "features",
            ListKey::DownloadButtons => "downloadButtons",
            ListKey::Reviews => "reviews",
            ListKey::News => "news",
        }
    }

    /// Selector for the homogeneous collection of nodes holding this list.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            ListKey::Features => FEATURE_ITEMS_SELECTOR,
            ListKey::DownloadButtons => DOWNLOAD_BUTTONS_SELECTOR,
            ListKey::Reviews => REVIEW_ITEMS_SELECTOR,
            ListKey::News => NEWS_ITEMS_SELECTOR,
        }
    }
}

/// One rewritable piece of text on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    HeroTitle,
    HeroText,
    HeroButton,
    FeaturesTitle,
    AboutTitle,
    AboutText,
    DownloadTitle,
    ReviewsTitle,
    NewsTitle,
    ContactTitle,
    /// Element `index` of a list key.
    Item(ListKey, usize),
}

impl TextSlot {
    /// Single-string slots in rewrite order.
    pub const SCALARS: [TextSlot; 10] = [
        TextSlot::HeroTitle,
        TextSlot::HeroText,
        TextSlot::HeroButton,
        TextSlot::FeaturesTitle,
        TextSlot::AboutTitle,
        TextSlot::DownloadTitle,
        TextSlot::ReviewsTitle,
        TextSlot::NewsTitle,
        TextSlot::ContactTitle,
        TextSlot::AboutText,
    ];

    /// Dictionary key backing this slot.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TextSlot::HeroTitle => "heroTitle",
            TextSlot::HeroText => "heroText",
            TextSlot::HeroButton => "heroBtn",
            TextSlot::FeaturesTitle => "featuresTitle",
            TextSlot::AboutTitle => "aboutTitle",
            TextSlot::AboutText => "aboutText",
            TextSlot::DownloadTitle => "downloadTitle",
            TextSlot::ReviewsTitle => "reviewsTitle",
            TextSlot::NewsTitle => "newsTitle",
            TextSlot::ContactTitle => "contactTitle",
            TextSlot::Item(key, _) => key.name(),
        }
    }

    /// Selector locating this slot's node (or node collection, for list items).
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            TextSlot::HeroTitle => HERO_TITLE_SELECTOR,
            TextSlot::HeroText => HERO_TEXT_SELECTOR,
            TextSlot::HeroButton => HERO_BUTTON_SELECTOR,
            TextSlot::FeaturesTitle => FEATURES_TITLE_SELECTOR,
            TextSlot::AboutTitle => ABOUT_TITLE_SELECTOR,
            TextSlot::AboutText => ABOUT_TEXT_SELECTOR,
            TextSlot::DownloadTitle => DOWNLOAD_TITLE_SELECTOR,
            TextSlot::ReviewsTitle => REVIEWS_TITLE_SELECTOR,
            TextSlot::NewsTitle => NEWS_TITLE_SELECTOR,
            TextSlot::ContactTitle => CONTACT_TITLE_SELECTOR,
            TextSlot::Item(key, _) => key.selector(),
        }
    }

    /// Position within the selector's matches.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TextSlot::Item(_, index) => index,
            _ => 0,
        }
    }
}

/// The `tr` and `en` dictionaries, validated against each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    tr: Dictionary,
    en: Dictionary,
}

impl Catalog {
    /// Pair two dictionaries.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::DictionaryParity`] when any list key has a
    /// different length in `tr` than in `en`.
    pub fn new(tr: Dictionary, en: Dictionary) -> Result<Self, LandingError> {
        for key in ListKey::ALL {
            let (tr_len, en_len) = (tr.list(key).len(), en.list(key).len());
            if tr_len != en_len {
                return Err(LandingError::DictionaryParity { key: key.name(), tr: tr_len, en: en_len });
            }
        }
        Ok(Self { tr, en })
    }

    /// Parse and validate the dictionaries embedded from `locales/`.
    pub fn builtin() -> Result<Self, LandingError> {
        let tr = Dictionary::from_json(Language::Tr, TR_JSON)?;
        let en = Dictionary::from_json(Language::En, EN_JSON)?;
        Self::new(tr, en)
    }

    #[must_use]
    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::Tr => &self.tr,
            Language::En => &self.en,
        }
    }

    /// Length of a list key; equal in both dictionaries by construction.
    #[must_use]
    pub fn list_len(&self, key: ListKey) -> usize {
        self.tr.list(key).len()
    }
}

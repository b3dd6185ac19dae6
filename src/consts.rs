//! Shared constants for the landing page.

// ── Timing / layout ─────────────────────────────────────────────

/// Height of the fixed navigation bar, subtracted from scroll targets.
pub const SCROLL_OFFSET_PX: f64 = 70.0;

/// Delay between fading the page out and rewriting its text.
pub const FADE_DELAY_MS: u32 = 200;

// ── Theme ───────────────────────────────────────────────────────

/// Class toggled on `<body>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Glyph shown on the theme button while dark mode is active.
pub const SUN_GLYPH: &str = "☀️";

/// Glyph shown on the theme button while light mode is active.
pub const MOON_GLYPH: &str = "🌙";

// ── Element ids ─────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const LANG_TOGGLE_ID: &str = "lang-toggle";

/// Anchors whose clicks are turned into smooth scrolls.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

// ── Text slot selectors ─────────────────────────────────────────

pub const HERO_TITLE_SELECTOR: &str = ".hero h1";
pub const HERO_TEXT_SELECTOR: &str = ".hero p";
pub const HERO_BUTTON_SELECTOR: &str = ".hero .btn";
pub const FEATURES_TITLE_SELECTOR: &str = "#features h2";
pub const ABOUT_TITLE_SELECTOR: &str = "#about h2";
pub const ABOUT_TEXT_SELECTOR: &str = ".about p";
pub const DOWNLOAD_TITLE_SELECTOR: &str = "#download h2";
pub const REVIEWS_TITLE_SELECTOR: &str = "#reviews h2";
pub const NEWS_TITLE_SELECTOR: &str = "#news h2";
pub const CONTACT_TITLE_SELECTOR: &str = "#contact h2";

pub const FEATURE_ITEMS_SELECTOR: &str = ".feature p";
pub const DOWNLOAD_BUTTONS_SELECTOR: &str = ".download-btn";
pub const REVIEW_ITEMS_SELECTOR: &str = ".reviews .review p";
pub const NEWS_ITEMS_SELECTOR: &str = ".news li";

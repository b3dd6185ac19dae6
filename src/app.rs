//! Landing page markup.
//!
//! Renders the page once, in the initial language. After mount the page is
//! treated as static markup: language switches rewrite text nodes in place
//! through [`crate::dom::Dom`] rather than re-rendering, so every class and id
//! below must stay in step with the selectors in [`crate::consts`].

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::consts::{LANG_TOGGLE_ID, MOON_GLYPH, THEME_TOGGLE_ID};
use crate::i18n::Dictionary;

/// Root component.
#[component]
pub fn App(dictionary: Dictionary) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Türkline"/>
        <LandingPage dictionary/>
    }
}

/// Navigation bar, hero, and the six content sections.
#[component]
pub fn LandingPage(dictionary: Dictionary) -> impl IntoView {
    let Dictionary {
        hero_title,
        hero_text,
        hero_btn,
        features_title,
        features,
        about_title,
        about_text,
        download_title,
        download_buttons,
        reviews_title,
        reviews,
        news_title,
        news,
        contact_title,
    } = dictionary;

    let nav = [
        ("features", features_title.clone()),
        ("about", about_title.clone()),
        ("download", download_title.clone()),
        ("reviews", reviews_title.clone()),
        ("news", news_title.clone()),
        ("contact", contact_title.clone()),
    ];
    let downloads = ["/downloads/turkline.apk", "/downloads/TurklineSetup.exe"];

    view! {
        <nav class="navbar">
            <span class="logo">"Türkline"</span>
            <ul class="nav-links">
                {nav
                    .into_iter()
                    .map(|(id, label)| view! { <li><a href=format!("#{id}")>{label}</a></li> })
                    .collect_view()}
            </ul>
            <div class="nav-actions">
                <button id=THEME_TOGGLE_ID class="icon-btn" title="Tema / Theme">{MOON_GLYPH}</button>
                <button id=LANG_TOGGLE_ID class="icon-btn" title="Dil / Language">"TR / EN"</button>
            </div>
        </nav>

        <section class="hero">
            <h1>{hero_title}</h1>
            <p>{hero_text}</p>
            <a href="#download" class="btn">{hero_btn}</a>
        </section>

        <section id="features">
            <h2>{features_title}</h2>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .map(|text| view! { <div class="feature"><p>{text}</p></div> })
                    .collect_view()}
            </div>
        </section>

        <section id="about" class="about">
            <h2>{about_title}</h2>
            <p>{about_text}</p>
        </section>

        <section id="download">
            <h2>{download_title}</h2>
            {download_buttons
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let href = downloads.get(i).copied().unwrap_or("#download");
                    view! { <a href=href class="btn download-btn">{label}</a> }
                })
                .collect_view()}
        </section>

        <section id="reviews" class="reviews">
            <h2>{reviews_title}</h2>
            {reviews
                .into_iter()
                .map(|text| view! { <div class="review"><p>{text}</p></div> })
                .collect_view()}
        </section>

        <section id="news" class="news">
            <h2>{news_title}</h2>
            <ul>{news.into_iter().map(|text| view! { <li>{text}</li> }).collect_view()}</ul>
        </section>

        <section id="contact">
            <h2>{contact_title}</h2>
        </section>

        <footer>"© 2025 Türkline"</footer>
    }
}

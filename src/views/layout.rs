use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

use super::components::nav_link;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn locale_switcher(locale: &str) -> Markup {
    html! {
        @for (lang, label) in [("en", "EN"), ("ja", "日本語")] {
            li {
                @if lang == locale {
                    strong { (label) }
                } @else {
                    a href="#"
                      hx-post=(names::SET_LOCALE_URL)
                      hx-vals=(format!(r#"{{"lang":"{lang}"}}"#)) {
                        (label)
                    }
                }
            }
        }
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        (nav_link("/", html! { strong { "Skin Quiz" } }))
                    }
                }
                ul {
                    li { (nav_link(names::QUIZ_URL, html! { (t!("nav.quiz", locale = locale)) })) }
                    li { (nav_link(names::SKIN_TYPES_URL, html! { (t!("nav.skin_types", locale = locale)) })) }
                    li { (nav_link(names::REPORT_URL, html! { (t!("nav.report", locale = locale)) })) }
                    (locale_switcher(locale))
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())
                (icon())

                title { (format!("{title} - Skin Quiz")) }
            }

            body."container" {
                (header(locale))
                (main(body))
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Skin Quiz" }
        (body)
    }
}

/// Full page for direct navigation, fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale)
    }
}

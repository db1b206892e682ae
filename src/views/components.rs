use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    scoring::{Dimension, SkinTrait},
    utils,
};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn trait_label(skin_trait: SkinTrait, locale: &str) -> String {
    let key = format!("trait.{}", skin_trait.key());
    t!(&key, locale = locale).to_string()
}

pub fn dimension_label(dimension: Dimension, locale: &str) -> String {
    let key = format!("dimension.{}", dimension.key());
    t!(&key, locale = locale).to_string()
}

/// Horizontal bar splitting a dimension between its two traits.
pub fn balance_bar(primary: f64, secondary: f64) -> Markup {
    let total = primary + secondary;
    let share = if total > 0.0 {
        primary * 100.0 / total
    } else {
        50.0
    };

    html! {
        div.balance title=(format!("{} / {}", utils::format_points(primary), utils::format_points(secondary))) {
            div.balance-primary style=(format!("width: {share:.0}%;")) {}
        }
    }
}

use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

pub struct LastResult {
    pub token: String,
    pub code: String,
}

pub fn homepage(last_result: Option<LastResult>, questions_count: usize, locale: &str) -> Markup {
    html! {
        h1 { (t!("home.title", locale = locale)) }
        p { (t!("home.intro", count = questions_count, locale = locale)) }

        @if let Some(last) = last_result {
            article {
                p {
                    (t!("home.last_result", locale = locale)) " "
                    mark { (last.code) }
                }
                button.secondary
                       hx-get=(names::results_url(&last.token))
                       hx-push-url="true"
                       hx-target="main" {
                    (t!("home.view_result", locale = locale))
                }
            }
        }

        button hx-get=(names::QUIZ_URL)
               hx-push-url="true"
               hx-target="main" {
            (t!("home.start", locale = locale))
        }
    }
}

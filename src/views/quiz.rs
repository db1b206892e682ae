use maud::{html, Markup};
use rust_i18n::t;

use super::components::{balance_bar, dimension_label, nav_link, trait_label};
use crate::{
    models::{Question, SelectionMode},
    names,
    scoring::{DimensionScore, SkinTypeCode},
    utils,
};

pub fn quiz_form(questions: &[Question], locale: &str) -> Markup {
    let count = questions.len();

    html! {
        h1 { (t!("quiz.title", locale = locale)) }
        p { (t!("quiz.intro", locale = locale)) }

        form hx-post=(names::SUBMIT_QUIZ_URL)
             hx-target="main"
             hx-swap="innerHTML"
             id="quiz-form" {
            @for (idx, question) in questions.iter().enumerate() {
                article {
                    p style="color: #666; font-size: 0.9rem; margin-bottom: 0.5rem;" {
                        (t!("quiz.question_prefix", locale = locale))
                        strong { (idx + 1) }
                        (t!("quiz.question_of", locale = locale))
                        (count)
                    }

                    h4 { (question.prompt) }

                    @if question.mode == SelectionMode::Multiple {
                        p style="color: #0066cc; font-weight: 500;" { (t!("quiz.multiple_choice", locale = locale)) }
                    }

                    fieldset {
                        @for (answer_idx, answer) in question.answers.iter().enumerate() {
                            label {
                                @match question.mode {
                                    SelectionMode::Single => {
                                        input type="radio"
                                              name=(names::question_field(question.id))
                                              value=(answer_idx)
                                              required;
                                    }
                                    SelectionMode::Multiple => {
                                        input type="checkbox"
                                              name=(names::question_field(question.id))
                                              value=(answer_idx);
                                    }
                                }
                                (answer.text)
                            }
                        }
                    }
                }
            }

            input type="submit" value=(t!("quiz.submit", locale = locale));
        }
    }
}

pub struct AnsweredQuestion {
    pub prompt: String,
    pub answers: Vec<String>,
}

pub struct ResultData {
    pub token: String,
    pub code: SkinTypeCode,
    pub description: String,
    pub breakdown: Vec<DimensionScore>,
    pub answered: Vec<AnsweredQuestion>,
    pub created_at: String,
}

pub fn result(data: ResultData, locale: &str) -> Markup {
    html! {
        h1 { (t!("result.title", locale = locale)) " " mark { (data.code.to_string()) } }
        p style="color: #666; font-size: 0.9rem;" {
            (t!("result.taken_at", locale = locale)) " " (data.created_at)
        }

        article {
            p {
                @for (i, skin_trait) in data.code.traits().into_iter().enumerate() {
                    @if i > 0 { " · " }
                    strong { (trait_label(skin_trait, locale)) }
                }
            }
            p { (data.description) }
        }

        article {
            h4 { (t!("result.breakdown", locale = locale)) }
            table {
                thead {
                    tr {
                        th { (t!("result.dimension", locale = locale)) }
                        th {}
                        th {}
                        th {}
                    }
                }
                tbody {
                    @for row in &data.breakdown {
                        @let letter = data.code.trait_for(row.dimension);
                        tr {
                            td { (dimension_label(row.dimension, locale)) }
                            td {
                                @if letter == row.primary {
                                    strong { (trait_label(row.primary, locale)) }
                                } @else {
                                    (trait_label(row.primary, locale))
                                }
                                " " (utils::format_points(row.primary_score))
                            }
                            td style="width: 40%;" { (balance_bar(row.primary_score, row.secondary_score)) }
                            td {
                                (utils::format_points(row.secondary_score)) " "
                                @if letter == row.secondary {
                                    strong { (trait_label(row.secondary, locale)) }
                                } @else {
                                    (trait_label(row.secondary, locale))
                                }
                            }
                        }
                    }
                }
            }
        }

        details {
            summary { (t!("result.your_answers", locale = locale)) }
            @if data.answered.is_empty() {
                p { (t!("result.no_answers", locale = locale)) }
            } @else {
                ol {
                    @for item in &data.answered {
                        li {
                            (item.prompt)
                            br;
                            em { (item.answers.join(", ")) }
                        }
                    }
                }
            }
        }

        div style="display: flex; gap: 1rem; margin-top: 1rem;" {
            button hx-get=(names::QUIZ_URL)
                   hx-push-url="true"
                   hx-target="main" {
                (t!("result.retake", locale = locale))
            }
            button.secondary
                   hx-get=(names::SKIN_TYPES_URL)
                   hx-push-url="true"
                   hx-target="main" {
                (t!("result.see_all_types", locale = locale))
            }
            button.secondary.outline
                   hx-post=(names::delete_result_url(&data.token))
                   hx-confirm=(t!("result.delete_confirm", locale = locale))
                   hx-push-url="/"
                   hx-target="main" {
                (t!("result.delete", locale = locale))
            }
        }
    }
}

pub fn skin_types<'a>(
    types: impl Iterator<Item = (&'a SkinTypeCode, &'a str)>,
    highlight: Option<SkinTypeCode>,
    locale: &str,
) -> Markup {
    html! {
        h1 { (t!("skin_types.title", locale = locale)) }
        p { (t!("skin_types.intro", locale = locale)) }

        @for (code, description) in types {
            article id=(code.to_string()) {
                h4 {
                    @if highlight == Some(*code) {
                        mark { (code.to_string()) }
                    } @else {
                        (code.to_string())
                    }
                    small style="margin-left: 0.5rem; color: #666;" {
                        @for (i, skin_trait) in code.traits().into_iter().enumerate() {
                            @if i > 0 { " · " }
                            (trait_label(skin_trait, locale))
                        }
                    }
                }
                p { (description) }
            }
        }

        p { (nav_link(names::QUIZ_URL, html! { (t!("home.start", locale = locale)) })) }
    }
}

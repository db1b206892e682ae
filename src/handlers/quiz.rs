use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;

use crate::{
    catalog::Catalog,
    extractors::{IsHtmx, Locale},
    names,
    rejections::{AppError, ResultExt},
    scoring::Selection,
    utils, views,
    views::quiz::{self as quiz_views, AnsweredQuestion, ResultData},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page))
        .route(names::SUBMIT_QUIZ_URL, post(submit_quiz))
        .route("/results/{token}", get(result_page))
        .route("/results/{token}/delete", post(delete_result))
        .route(names::SKIN_TYPES_URL, get(skin_types_page))
}

async fn quiz_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> maud::Markup {
    views::render(
        is_htmx,
        "Quiz",
        quiz_views::quiz_form(state.catalog.questions(), &locale),
        &locale,
    )
}

/// Parse an url-encoded quiz form (`q{id}=answer_idx`, repeated for multiple choice)
/// into one selection per question, in order of first appearance.
pub(crate) fn parse_answer_form(body: &str) -> Result<Vec<Selection>, String> {
    let mut selections: Vec<Selection> = Vec::new();

    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let Some(question_id) = names::parse_question_field(key) else {
            continue;
        };

        let plus_decoded = value.replace('+', " ");
        let value = urlencoding::decode(&plus_decoded)
            .map_err(|e| format!("failed to decode form value: {e}"))?;
        let answer_idx = value
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid answer index {value:?}: {e}"))?;

        match selections.iter_mut().find(|s| s.question_id == question_id) {
            Some(selection) => selection.answers.push(answer_idx),
            None => selections.push(Selection::new(question_id, vec![answer_idx])),
        }
    }

    Ok(selections)
}

async fn submit_quiz(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    body: Bytes,
) -> Result<axum::response::Response, AppError> {
    let body = std::str::from_utf8(&body).reject_input("failed to parse body as UTF-8")?;
    let selections = parse_answer_form(body).reject_input("malformed quiz answers")?;

    tracing::info!("received quiz answers for {} questions", selections.len());

    let outcome = state
        .catalog
        .score(&selections)
        .reject_input("invalid quiz answers")?;

    let token = state
        .db
        .save_result(&outcome, &selections)
        .await
        .reject("could not store quiz result")?;

    let stored = state
        .db
        .get_result(&token)
        .await
        .reject("could not get stored result")?
        .ok_or(AppError::Internal("stored result disappeared"))?;

    let data = ResultData {
        token: token.clone(),
        code: outcome.code,
        description: state.catalog.description(&outcome.code).to_string(),
        breakdown: outcome.scores.breakdown(),
        answered: answered_questions(&state.catalog, &selections),
        created_at: stored.created_at,
    };

    let cookie = utils::cookie(names::RESULT_COOKIE_NAME, &token, state.secure_cookies)
        .reject("could not build result cookie")?;
    let push_url = HeaderValue::from_str(&names::results_url(&token))
        .reject("could not build result url")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("HX-Push-Url", push_url);

    let page = views::render(is_htmx, "Result", quiz_views::result(data, &locale), &locale);
    Ok((headers, page).into_response())
}

fn answered_questions(catalog: &Catalog, selections: &[Selection]) -> Vec<AnsweredQuestion> {
    catalog
        .questions()
        .iter()
        .filter_map(|q| {
            let selection = selections.iter().find(|s| s.question_id == q.id)?;
            let answers: Vec<String> = selection
                .answers
                .iter()
                .filter_map(|&idx| q.answers.get(idx).map(|a| a.text.clone()))
                .collect();
            (!answers.is_empty()).then(|| AnsweredQuestion {
                prompt: q.prompt.clone(),
                answers,
            })
        })
        .collect()
}

async fn result_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Path(token): Path<String>,
) -> Result<maud::Markup, AppError> {
    let result = state
        .db
        .get_result(&token)
        .await
        .reject("could not get result")?
        .ok_or(AppError::NotFound("result not found"))?;

    let code = result.skin_type().reject("stored result has an invalid code")?;
    let selections = state
        .db
        .get_selections(result.id)
        .await
        .reject("could not get result selections")?;

    let data = ResultData {
        code,
        description: state.catalog.description(&code).to_string(),
        breakdown: result.scores().breakdown(),
        answered: answered_questions(&state.catalog, &selections),
        created_at: result.created_at,
        token: result.token,
    };

    Ok(views::render(
        is_htmx,
        "Result",
        quiz_views::result(data, &locale),
        &locale,
    ))
}

async fn delete_result(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(token): Path<String>,
) -> Result<axum::response::Response, AppError> {
    let deleted = state
        .db
        .delete_result(&token)
        .await
        .reject("could not delete result")?;

    if !deleted {
        return Err(AppError::NotFound("result not found"));
    }

    let expired = HeaderValue::from_str(&format!(
        "{}=; Max-Age=0; Path=/",
        names::RESULT_COOKIE_NAME
    ))
    .reject("could not build result cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, expired);

    let page = views::titled(
        "Home",
        views::homepage::homepage(None, state.catalog.questions().len(), &locale),
    );
    Ok((headers, page).into_response())
}

async fn skin_types_page(
    State(state): State<AppState>,
    jar: CookieJar,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<maud::Markup, AppError> {
    let highlight = super::homepage::last_result(&state, &jar)
        .await?
        .and_then(|last| last.code.parse().ok());

    Ok(views::render(
        is_htmx,
        "Skin types",
        quiz_views::skin_types(state.catalog.skin_types(), highlight, &locale),
        &locale,
    ))
}

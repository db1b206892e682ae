use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    extractors::{self, IsHtmx, Locale},
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::homepage::{self as homepage_views, LastResult};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

/// The stored result referenced by the result cookie, if it still exists.
pub(crate) async fn last_result(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Option<LastResult>, AppError> {
    let Some(token) = jar
        .get(names::RESULT_COOKIE_NAME)
        .map(|c| c.value().to_string())
    else {
        return Ok(None);
    };

    let result = state
        .db
        .get_result(&token)
        .await
        .reject("could not get result")?;

    Ok(result.map(|r| LastResult {
        token: r.token,
        code: r.code,
    }))
}

async fn homepage(
    State(state): State<AppState>,
    jar: CookieJar,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<maud::Markup, AppError> {
    let last = last_result(&state, &jar).await?;

    Ok(views::render(
        is_htmx,
        "Home",
        homepage_views::homepage(last, state.catalog.questions().len(), &locale),
        &locale,
    ))
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(
    State(state): State<AppState>,
    Form(body): Form<SetLocaleBody>,
) -> Result<impl IntoResponse, AppError> {
    let locale = extractors::supported_locale(&body.lang).unwrap_or(names::DEFAULT_LOCALE);
    let cookie = utils::cookie(names::LOCALE_COOKIE_NAME, locale, state.secure_cookies)
        .reject("could not build locale cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("HX-Refresh", HeaderValue::from_static("true"));

    Ok((headers, ""))
}

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;

use crate::names;

/// `HX-Request: true` is set by htmx on every request it issues.
pub(crate) fn sent_by_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(names::HX_REQUEST_HEADER)
        .is_some_and(|v| v.as_bytes() == b"true")
}

/// Partial page requests get the fragment only; anything else the full layout.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IsHtmx(sent_by_htmx(&parts.headers)))
    }
}

/// Locale from the `lang` cookie, then `Accept-Language`, then `"en"`.
pub struct Locale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = jar
            .get(names::LOCALE_COOKIE_NAME)
            .and_then(|c| supported_locale(c.value()))
            .or_else(|| {
                parts
                    .headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(locale_from_accept_language)
            })
            .unwrap_or(names::DEFAULT_LOCALE);
        Ok(Locale(locale.to_string()))
    }
}

pub(crate) fn supported_locale(lang: &str) -> Option<&'static str> {
    let primary = lang.split('-').next().unwrap_or(lang).trim();
    match primary.to_ascii_lowercase().as_str() {
        "en" => Some("en"),
        "ja" => Some("ja"),
        _ => None,
    }
}

/// Highest-weighted supported language of an `Accept-Language` header.
fn locale_from_accept_language(header: &str) -> Option<&'static str> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .map(|entry| match entry.trim().split_once(';') {
            Some((lang, params)) => {
                let q = params
                    .split(';')
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|v| v.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (lang.trim(), q)
            }
            None => (entry.trim(), 1.0),
        })
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
        .iter()
        .find_map(|(lang, _)| supported_locale(lang))
}

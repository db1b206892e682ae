rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod scoring;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub catalog: Arc<Catalog>,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::report::routes())
        .merge(handlers::api::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Form posts must come from htmx; the JSON API is exempt.
async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    let exempt = req.uri().path().starts_with(names::API_PREFIX);
    if state_changing.contains(req.method())
        && !exempt
        && !extractors::sent_by_htmx(req.headers())
    {
        tracing::warn!("rejected {} {} without htmx header", req.method(), req.uri().path());
        return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
    }

    next.run(req).await
}

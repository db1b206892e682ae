use axum::{extract::State, routing::get, Router};

use crate::{
    extractors::{IsHtmx, Locale},
    names,
    rejections::{AppError, ResultExt},
    views,
    views::report::{self as report_views, ReportRow},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::REPORT_URL, get(report))
}

async fn report(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<maud::Markup, AppError> {
    let total = state
        .db
        .results_count()
        .await
        .reject("could not count results")?;

    let rows = state
        .db
        .code_distribution()
        .await
        .reject("could not get code distribution")?
        .into_iter()
        .map(|c| ReportRow {
            code: c.code,
            count: c.count,
        })
        .collect();

    Ok(views::render(
        is_htmx,
        "Report",
        report_views::report(total, rows, &locale),
        &locale,
    ))
}

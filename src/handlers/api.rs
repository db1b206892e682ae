use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::Question,
    scoring::{DimensionScore, ScoreError, Selection, SkinTypeCode, TraitScores},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/questions", get(questions))
        .route("/api/score", post(score))
        .route("/api/skin-types", get(skin_types))
        .route("/api/skin-types/{code}", get(skin_type))
}

/// JSON error body: `{"error": "..."}`.
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError(StatusCode::UNPROCESSABLE_ENTITY, e.body_text())
    }
}

impl From<ScoreError> for ApiError {
    fn from(e: ScoreError) -> Self {
        ApiError(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    }
}

async fn questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.catalog.questions().to_vec())
}

#[derive(Deserialize)]
struct ScoreRequest {
    selections: Vec<Selection>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreResponse {
    code: SkinTypeCode,
    description: String,
    scores: TraitScores,
    breakdown: Vec<DimensionScore>,
}

async fn score(
    State(state): State<AppState>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let Json(body) = body?;
    let outcome = state.catalog.score(&body.selections)?;

    Ok(Json(ScoreResponse {
        code: outcome.code,
        description: state.catalog.description(&outcome.code).to_string(),
        breakdown: outcome.scores.breakdown(),
        scores: outcome.scores,
    }))
}

#[derive(Serialize)]
struct SkinTypeInfo {
    code: SkinTypeCode,
    description: String,
}

async fn skin_types(State(state): State<AppState>) -> Json<Vec<SkinTypeInfo>> {
    Json(
        state
            .catalog
            .skin_types()
            .map(|(code, description)| SkinTypeInfo {
                code: *code,
                description: description.to_string(),
            })
            .collect(),
    )
}

async fn skin_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SkinTypeInfo>, ApiError> {
    let code: SkinTypeCode = code
        .parse()
        .map_err(|e: crate::scoring::CodeParseError| ApiError(StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(SkinTypeInfo {
        code,
        description: state.catalog.description(&code).to_string(),
    }))
}

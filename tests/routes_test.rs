mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::create_test_state;
use serde_json::Value;
use tower::ServiceExt;

async fn app() -> Router {
    skinquiz::router(create_test_state().await)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn htmx_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("HX-Request", "true")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_pages_render() {
    let app = app().await;

    for uri in ["/", "/quiz", "/skin-types", "/report"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_quiz_page_lists_every_question() {
    let response = app().await.oneshot(get("/quiz")).await.unwrap();
    let body = body_string(response).await;

    assert!(body.contains("name=\"q1\""));
    assert!(body.contains("name=\"q16\""));
    assert!(body.contains("type=\"checkbox\""));
}

#[tokio::test]
async fn test_submit_requires_htmx_header() {
    let request = Request::builder()
        .method("POST")
        .uri("/submit-quiz")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("q1=0"))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_submit_quiz_stores_result() {
    let state = create_test_state().await;
    let app = skinquiz::router(state.clone());

    let response = app
        .clone()
        .oneshot(htmx_form("/submit-quiz", "q1=0&q2=2&q3=2&q4=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("quiz_result="));

    let push_url = response
        .headers()
        .get("HX-Push-Url")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(push_url.starts_with("/results/"));

    let body = body_string(response).await;
    assert!(body.contains("DINT"));
    assert_eq!(state.db.results_count().await.unwrap(), 1);

    let response = app.oneshot(get(&push_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("DINT"));
}

#[tokio::test]
async fn test_submit_rejects_unknown_answer() {
    let response = app()
        .await
        .oneshot(htmx_form("/submit-quiz", "q1=9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_rejects_malformed_answer() {
    let response = app()
        .await
        .oneshot(htmx_form("/submit-quiz", "q1=dry"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_result_is_not_found() {
    let response = app()
        .await
        .oneshot(get("/results/01HZZZZZZZZZZZZZZZZZZZZZZZ"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_result() {
    let state = create_test_state().await;
    let app = skinquiz::router(state.clone());

    let response = app
        .clone()
        .oneshot(htmx_form("/submit-quiz", "q1=3"))
        .await
        .unwrap();
    let push_url = response
        .headers()
        .get("HX-Push-Url")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();

    let delete_url = format!("{push_url}/delete");
    let response = app
        .clone()
        .oneshot(htmx_form(&delete_url, ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.db.results_count().await.unwrap(), 0);

    let response = app.oneshot(htmx_form(&delete_url, "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_questions() {
    let response = app().await.oneshot(get("/api/questions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 16);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["answers"][0]["points"]["Dry"], 1.0);
}

#[tokio::test]
async fn test_api_score() {
    let request = json_post(
        "/api/score",
        serde_json::json!({
            "selections": [
                { "questionId": 1, "answers": [0] },
                { "questionId": 2, "answers": [2] },
                { "questionId": 3, "answers": [2] },
                { "questionId": 4, "answers": [2] },
            ]
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DINT");
    assert!(!json["description"].as_str().unwrap().is_empty());
    assert_eq!(json["scores"]["Dry"], 1.0);
    assert_eq!(json["breakdown"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_api_score_does_not_store() {
    let state = create_test_state().await;
    let app = skinquiz::router(state.clone());

    let request = json_post("/api/score", serde_json::json!({ "selections": [] }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["code"], "DSPW");
    assert_eq!(state.db.results_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_api_score_rejects_unknown_question() {
    let request = json_post(
        "/api/score",
        serde_json::json!({ "selections": [{ "questionId": 99, "answers": [0] }] }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_api_score_rejects_repeated_question() {
    let state = create_test_state().await;
    let app = skinquiz::router(state);

    let request = json_post(
        "/api/score",
        serde_json::json!({
            "selections": [
                { "questionId": 1, "answers": [0] },
                { "questionId": 1, "answers": [3] },
                { "questionId": 1, "answers": [3] },
            ]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("question 1"));
}

#[tokio::test]
async fn test_api_score_malformed_body_is_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"selections\": ["))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_submit_rejects_two_answers_on_single_question() {
    let response = app()
        .await
        .oneshot(htmx_form("/submit-quiz", "q1=0&q1=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_skin_types() {
    let response = app().await.oneshot(get("/api/skin-types")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 16);

    let response = app()
        .await
        .oneshot(get("/api/skin-types/oint"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["code"], "OINT");

    let response = app()
        .await
        .oneshot(get("/api/skin-types/XXXX"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_locale_sets_cookie() {
    let response = app()
        .await
        .oneshot(htmx_form("/set-locale", "lang=ja"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("lang=ja"));
}

#[tokio::test]
async fn test_static_files() {
    let response = app().await.oneshot(get("/static/index.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );

    let response = app().await.oneshot(get("/static/missing.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

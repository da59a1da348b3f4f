//! API routes

mod analyze;
mod characters;
mod drafts;
mod error;

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

pub use error::ApiError;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    ai_enabled: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ai_enabled: state.ai.is_enabled(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(drafts::router())
        .merge(characters::router())
        .merge(analyze::router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::providers::AiGateway;

    fn app() -> Router {
        router().with_state(AppState::new(AiGateway::disabled()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["ai_enabled"], false);
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/draft",
            Some(json!({"name": "Draft A", "participants": ["A", "B"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": "Draft A", "participants": ["A", "B"], "picks": []})
        );

        let (status, body) =
            send(&app, Method::POST, "/draft/1/pick", Some(json!({"player": "X"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": "Draft A", "participants": ["A", "B"], "picks": [{"player": "X"}]})
        );

        let (status, body) = send(&app, Method::GET, "/drafts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 1, "name": "Draft A", "participants": ["A", "B"], "picks": [{"player": "X"}]}])
        );
    }

    #[tokio::test]
    async fn test_draft_ids_follow_creation_order() {
        let app = app();

        for n in 1..=3 {
            let (_, body) = send(
                &app,
                Method::POST,
                "/draft",
                Some(json!({"name": format!("Draft {}", n)})),
            )
            .await;
            assert_eq!(body["id"], n);
            assert_eq!(body["participants"], json!([]));
        }

        let (_, body) = send(&app, Method::GET, "/drafts", None).await;
        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_pick_for_unknown_draft() {
        let app = app();
        send(&app, Method::POST, "/draft", Some(json!({"name": "One"}))).await;
        send(&app, Method::POST, "/draft", Some(json!({"name": "Two"}))).await;

        let (status, body) =
            send(&app, Method::POST, "/draft/999/pick", Some(json!({"player": "X"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Draft not found"}));

        let (_, body) = send(&app, Method::GET, "/drafts", None).await;
        for draft in body.as_array().unwrap() {
            assert_eq!(draft["picks"], json!([]));
        }
    }

    #[tokio::test]
    async fn test_pick_leaves_other_drafts_alone() {
        let app = app();
        send(&app, Method::POST, "/draft", Some(json!({"name": "One"}))).await;
        send(&app, Method::POST, "/draft", Some(json!({"name": "Two"}))).await;

        send(&app, Method::POST, "/draft/2/pick", Some(json!({"player": "X", "round": 1}))).await;
        let (_, body) =
            send(&app, Method::POST, "/draft/2/pick", Some(json!({"player": "Y", "round": 1}))).await;
        assert_eq!(
            body["picks"],
            json!([{"player": "X", "round": 1}, {"player": "Y", "round": 1}])
        );

        let (_, body) = send(&app, Method::GET, "/drafts", None).await;
        assert_eq!(body[0]["picks"], json!([]));
    }

    #[tokio::test]
    async fn test_invalid_draft_requests() {
        let app = app();
        send(&app, Method::POST, "/draft", Some(json!({"name": "One"}))).await;

        let (status, body) =
            send(&app, Method::POST, "/draft/abc/pick", Some(json!({"player": "X"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));

        let (status, _) =
            send(&app, Method::POST, "/draft/%201/pick", Some(json!({"player": "X"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            send(&app, Method::POST, "/draft", Some(json!({"participants": ["A"]}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::POST, "/draft/1/pick", Some(json!(["X"]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, body) = send(&app, Method::GET, "/drafts", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_character_add_and_search() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/character",
            Some(json!({"name": "Luke Skywalker", "side": "light"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Character added",
                "character": {"name": "Luke Skywalker", "side": "light"}
            })
        );

        send(&app, Method::POST, "/character", Some(json!({"name": "Leia"}))).await;
        send(&app, Method::POST, "/character", Some(json!({"name": "Luke's Dog"}))).await;

        let (status, body) = send(&app, Method::GET, "/character/search?q=luke", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"name": "Luke Skywalker", "side": "light"},
                {"name": "Luke's Dog"}
            ])
        );

        let (_, body) = send(&app, Method::GET, "/character/search?q=LEIA", None).await;
        assert_eq!(body, json!([{"name": "Leia"}]));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let app = app();
        send(&app, Method::POST, "/character", Some(json!({"name": "Leia"}))).await;

        let (status, body) = send(&app, Method::GET, "/character/search", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("q"));

        let (status, body) = send(&app, Method::GET, "/character/search?q=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"name": "Leia"}]));
    }

    #[tokio::test]
    async fn test_character_requires_name() {
        let app = app();

        let (status, _) =
            send(&app, Method::POST, "/character", Some(json!({"side": "dark"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/character/search?q=", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_analyze_without_key() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/analyze",
            Some(json!({"prompt": "Who won the draft?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"analysis": "AI not enabled."}));

        let (status, _) = send(&app, Method::POST, "/analyze", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let app = app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/draft")
                    .body(Body::from(r#"{"name":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

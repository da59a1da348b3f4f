//! Draft endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::models::{Draft, Pick};
use crate::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    pub name: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Parse the `:id` path segment into a draft id
fn parse_draft_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid(format!("Invalid draft id: {}", raw)))
}

async fn create_draft(
    State(state): State<AppState>,
    payload: Result<Json<CreateDraftRequest>, JsonRejection>,
) -> Result<Json<Draft>, ApiError> {
    let Json(request) = payload?;
    let draft = state.drafts.create(request.name, request.participants).await;
    Ok(Json(draft))
}

async fn list_drafts(State(state): State<AppState>) -> Json<Vec<Draft>> {
    Json(state.drafts.list().await)
}

async fn add_pick(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Pick>, JsonRejection>,
) -> Result<Json<Draft>, ApiError> {
    let id = parse_draft_id(&id)?;
    let Json(pick) = payload?;
    let draft = state.drafts.add_pick(id, pick).await?;
    Ok(Json(draft))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/draft", post(create_draft))
        .route("/drafts", get(list_drafts))
        .route("/draft/:id/pick", post(add_pick))
}

//! Free-text AI analysis endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.ai.analyze(&request.prompt).await;
    Ok(Json(AnalyzeResponse { analysis }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

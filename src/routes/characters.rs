//! Character catalog endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::models::Character;
use crate::AppState;

use super::ApiError;

#[derive(Debug, Serialize)]
pub struct CharacterAdded {
    pub message: &'static str,
    pub character: Character,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

async fn add_character(
    State(state): State<AppState>,
    payload: Result<Json<Character>, JsonRejection>,
) -> Result<Json<CharacterAdded>, ApiError> {
    let Json(character) = payload?;
    let character = state.characters.add(character).await;
    Ok(Json(CharacterAdded {
        message: "Character added",
        character,
    }))
}

async fn search_characters(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let Query(params) = params?;
    let query = params
        .q
        .ok_or_else(|| ApiError::invalid("Missing query parameter `q`"))?;

    Ok(Json(state.characters.search(&query).await))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/character", post(add_character))
        .route("/character/search", get(search_characters))
}

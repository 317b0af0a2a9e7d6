use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateFruit, Fruit},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_fruits(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Fruit>>)> {
    let fruits = state.fruits.read().await.list();

    info!(count = fruits.len(), "Listed fruits");

    Ok((StatusCode::OK, Json(fruits)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_fruit(
    State(state): State<AppState>,
    payload: Result<Json<CreateFruit>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Fruit>)> {
    // Every decode failure is a malformed candidate, whatever axum's own status would be
    let Json(candidate) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let mut store = state.fruits.write().await;
    let fruit = store.create(candidate)?;
    let total = store.len();
    drop(store);

    info!(id = fruit.id, name = %fruit.name, total, "Created fruit");

    Ok((StatusCode::CREATED, Json(fruit)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_fruit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Fruit>)> {
    let fruit = state.fruits.read().await.get(&id)?;

    info!(id = fruit.id, "Fetched fruit");

    Ok((StatusCode::OK, Json(fruit)))
}

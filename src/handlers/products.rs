use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::AppJson;
use crate::{
    error::{AppError, AppResult},
    models::{CodeExists, ProductInput},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let products = state.store.list();

    info!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": products,
            "count": products.len(),
        })),
    ))
}

// ── Create (batch) ────────────────────────────────────────────────────────────

pub async fn create_products(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Vec<ProductInput>>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let created = state.store.create(&payload)?;

    info!(count = created.len(), "Created products");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "data": created,
            "count": created.len(),
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = state
        .store
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": product }))))
}

// ── Lookups by product code ───────────────────────────────────────────────────

pub async fn get_product_by_code(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = state
        .store
        .get_by_code(code)
        .ok_or_else(|| AppError::NotFound(format!("No product with code {}", code)))?;

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": product }))))
}

pub async fn product_code_exists(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> Json<CodeExists> {
    Json(CodeExists {
        code,
        exists: state.store.code_exists(code),
    })
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    AppJson(payload): AppJson<ProductInput>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = state.store.update(id, &payload)?;

    info!(id, code = product.product_code, "Updated product");

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": product }))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<StatusCode> {
    state.store.remove(id)?;

    info!(id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}

pub mod products;

use axum::{
    extract::{FromRequest, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{error::AppError, AppState};

/// `Json` extractor whose rejections render as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "catalog-service",
            "products": state.store.len(),
        })),
    )
}

/// `GET /` → 302 to the API docs.
pub async fn docs_redirect(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.docs_path.to_string())],
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{build_router, store::ProductStore, AppState};

    #[tokio::test]
    async fn root_redirects_to_docs() {
        let app = build_router(AppState::new(ProductStore::new(), "/ms-catalog/"));
        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers()[header::LOCATION], "/ms-catalog/");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_router(AppState::new(ProductStore::new(), "/"));
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

use crate::domain::order::CreateOrderRequest;
use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn pay(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> impl IntoResponse {
    match state.order_service.create_order(req).await {
        Ok(placed) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": placed })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_order(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.orders_repo.get(&id).await {
        Ok(Some(order)) => {
            (axum::http::StatusCode::OK, Json(serde_json::json!({ "order": order }))).into_response()
        }
        Ok(None) => ApiError::NotFound.into_response(),
        Err(e) => ApiError::Storage(e).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

use crate::domain::order::OrderStatus;
use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn list_orders(State(state): State<AppState>) -> impl IntoResponse {
    match state.orders_repo.list().await {
        Ok(orders) => {
            (axum::http::StatusCode::OK, Json(serde_json::json!({ "orders": orders }))).into_response()
        }
        Err(e) => ApiError::Storage(e).into_response(),
    }
}

pub async fn mark_paid(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.orders_repo.get(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ApiError::NotFound.into_response(),
        Err(e) => return ApiError::Storage(e).into_response(),
    }

    if let Err(e) = state.orders_repo.update_status(&id, OrderStatus::Paid).await {
        return ApiError::Storage(e).into_response();
    }

    match state.orders_repo.get(&id).await {
        Ok(Some(updated)) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": updated })),
        )
            .into_response(),
        Ok(None) => ApiError::NotFound.into_response(),
        Err(e) => ApiError::Storage(e).into_response(),
    }
}

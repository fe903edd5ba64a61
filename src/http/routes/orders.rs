use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};

use crate::http::{errors, AppState};
use crate::model::{OrderCreate, OrderDetails, OrderId, UserId};
use crate::order_actor::OrderError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
        .route("/user/:user_id", get(list_orders_by_user))
        .route("/:id/confirm", patch(confirm_order))
        .route("/:id/ship", patch(ship_order))
        .route("/:id/cancel", patch(cancel_order))
}

fn respond(result: Result<OrderDetails, OrderError>, status: StatusCode) -> Response {
    match result {
        Ok(order) => (status, Json(order)).into_response(),
        Err(e) => errors::order_error_to_response(e),
    }
}

pub async fn create_order(
    Extension(state): Extension<AppState>,
    body: Result<Json<OrderCreate>, JsonRejection>,
) -> Response {
    let Json(params) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };
    // Id 0 is never assigned; treat it as a missing field.
    if params.user_id.0 == 0 || params.items.iter().any(|line| line.product_id.0 == 0) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            "user_id and every product_id are required",
        );
    }
    respond(state.orders.create_order(params).await, StatusCode::CREATED)
}

pub async fn list_orders(Extension(state): Extension<AppState>) -> Response {
    match state.orders.list_orders().await {
        Ok(orders) => Json(orders).into_response(),
        Err(e) => errors::order_error_to_response(e),
    }
}

pub async fn list_orders_by_user(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match errors::parse_id(&user_id) {
        Ok(id) => UserId(id),
        Err(response) => return response,
    };
    match state.orders.list_orders_by_user(user_id).await {
        Ok(orders) => Json(orders).into_response(),
        Err(e) => errors::order_error_to_response(e),
    }
}

pub async fn get_order(Extension(state): Extension<AppState>, Path(id): Path<String>) -> Response {
    match errors::parse_id(&id) {
        Ok(id) => respond(state.orders.get_order(OrderId(id)).await, StatusCode::OK),
        Err(response) => response,
    }
}

pub async fn confirm_order(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match errors::parse_id(&id) {
        Ok(id) => respond(state.orders.confirm_order(OrderId(id)).await, StatusCode::OK),
        Err(response) => response,
    }
}

pub async fn ship_order(Extension(state): Extension<AppState>, Path(id): Path<String>) -> Response {
    match errors::parse_id(&id) {
        Ok(id) => respond(state.orders.ship_order(OrderId(id)).await, StatusCode::OK),
        Err(response) => response,
    }
}

pub async fn cancel_order(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match errors::parse_id(&id) {
        Ok(id) => respond(state.orders.cancel_order(OrderId(id)).await, StatusCode::OK),
        Err(response) => response,
    }
}

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::http::{errors, AppState};
use crate::model::{UserCreate, UserId};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

pub async fn list_users(Extension(state): Extension<AppState>) -> Response {
    match state.users.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(e) => errors::user_error_to_response(e),
    }
}

pub async fn get_user(Extension(state): Extension<AppState>, Path(id): Path<String>) -> Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => UserId(id),
        Err(response) => return response,
    };
    match state.users.get_user(id).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => errors::user_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(state): Extension<AppState>,
    body: Result<Json<UserCreate>, JsonRejection>,
) -> Response {
    let Json(params) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };
    let id = match state.users.create_user(params).await {
        Ok(id) => id,
        Err(e) => return errors::user_error_to_response(e),
    };
    match state.users.get_user(id).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => errors::user_error_to_response(e),
    }
}

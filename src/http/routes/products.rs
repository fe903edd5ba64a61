use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::http::{errors, AppState};
use crate::model::{ProductCreate, ProductId};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product))
}

pub async fn list_products(Extension(state): Extension<AppState>) -> Response {
    match state.products.list_products().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => ProductId(id),
        Err(response) => return response,
    };
    match state.products.get_product(id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(state): Extension<AppState>,
    body: Result<Json<ProductCreate>, JsonRejection>,
) -> Response {
    let Json(params) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };
    let id = match state.products.create_product(params).await {
        Ok(id) => id,
        Err(e) => return errors::product_error_to_response(e),
    };
    match state.products.get_product(id).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

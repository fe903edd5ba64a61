//! REST boundary over the three clients.
//!
//! Errors are returned as `{"error": <code>, "message": <text>}`; see
//! [`errors`] for the status code of each error kind.

use axum::{extract::Extension, routing::get, Json, Router};
use serde_json::json;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::lifecycle::OrderSystem;

pub mod errors;
pub mod routes;

/// Clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn from_system(system: &OrderSystem) -> Self {
        Self {
            users: system.user_client.clone(),
            products: system.product_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

/// Builds the router: `GET /health` plus everything under `/api`.
///
/// The router holds clones of the clients; drop it (i.e. stop serving) before
/// calling [`OrderSystem::shutdown`].
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::router())
        .layer(Extension(state))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

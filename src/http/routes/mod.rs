use axum::Router;

pub mod orders;
pub mod products;
pub mod users;

/// Router for every `/api` endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}

//! Demo data for a fresh system.

use super::OrderSystem;
use crate::model::{ProductCreate, UserCreate};
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to seed users: {0}")]
    User(#[from] UserError),
    #[error("Failed to seed products: {0}")]
    Product(#[from] ProductError),
}

const USERS: [(&str, &str); 3] = [
    ("Juan Pérez", "juan@example.com"),
    ("María García", "maria@example.com"),
    ("Carlos López", "carlos@example.com"),
];

const PRODUCTS: [(&str, f64, u32); 8] = [
    ("Laptop Dell XPS 13", 1200.00, 15),
    ("iPhone 15 Pro", 999.00, 25),
    ("Sony WH-1000XM5", 399.00, 30),
    ("Samsung Galaxy Tab S9", 649.00, 20),
    ("Apple Watch Series 9", 429.00, 40),
    ("Logitech MX Master 3S", 99.00, 50),
    ("LG UltraFine 4K Monitor", 699.00, 10),
    ("Mechanical Keyboard RGB", 159.00, 35),
];

/// Creates the demo users and products, unless users already exist.
///
/// Returns `true` if data was inserted.
pub async fn seed(system: &OrderSystem) -> Result<bool, SeedError> {
    if !system.user_client.list_users().await?.is_empty() {
        info!("Data already seeded");
        return Ok(false);
    }

    for (name, email) in USERS {
        system
            .user_client
            .create_user(UserCreate::new(name, email))
            .await?;
    }
    for (name, price, stock) in PRODUCTS {
        system
            .product_client
            .create_product(ProductCreate::new(name, price, stock))
            .await?;
    }

    info!(users = USERS.len(), products = PRODUCTS.len(), "Seeded demo data");
    Ok(true)
}

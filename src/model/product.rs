use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A sellable item and its on-hand stock.
///
/// `stock` is unsigned, so it can never go negative; it only changes through
/// the stock actions in [`ProductAction`](crate::product_actor::ProductAction).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

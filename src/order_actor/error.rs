//! Error types for the Order actor.

use crate::model::{OrderId, OrderStatus, ProductId, UserId};
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The user placing the order does not exist.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// A product referenced by the order does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line asks for more units than the product has in stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The state machine has no edge from `from` to `to`.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatus { from: OrderStatus, to: OrderStatus },

    /// Shipped orders are final.
    #[error("Cannot cancel shipped order {0}")]
    CannotCancelShipped(OrderId),

    /// Every line must order at least one unit.
    #[error("Invalid quantity for {0}: must be at least 1")]
    InvalidQuantity(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Translates a failed stock operation on `product_id`.
    pub(crate) fn from_product(product_id: ProductId, e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock {
                requested,
                available,
            } => OrderError::InsufficientStock {
                product_id,
                requested,
                available,
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }

    pub(crate) fn from_user(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::UserNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

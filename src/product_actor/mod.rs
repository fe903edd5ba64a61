//! # Product Actor
//!
//! The inventory store: a [`ResourceActor<Product>`](actor_framework::ResourceActor)
//! whose stock is changed only through [`ProductAction`]s.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - creates the actor and its [`ProductClient`]
//!
//! ## Stock Actions
//!
//! ```rust,ignore
//! let stock = product_client.check_stock(product_id).await?;
//! product_client.set_stock(product_id, 50).await?;
//!
//! // Atomic check-and-decrement; fails with InsufficientStock and changes nothing.
//! product_client.reserve_stock(product_id, quantity).await?;
//! product_client.release_stock(product_id, quantity).await?;
//! ```
//!
//! All products share one actor, so every stock change in the system is
//! applied by a single task in arrival order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, ProductClient::new(generic_client))
}

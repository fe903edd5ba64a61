//! # Order Actor
//!
//! Orders and their lifecycle. The order actor depends on the user and product
//! actors, which it receives as its run context:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = (UserClient, ProductClient);
//! }
//!
//! tokio::spawn(order_actor.run((user_client.clone(), product_client.clone())));
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - the lifecycle engine ([`ActorEntity`](actor_framework::ActorEntity) for [`Order`])
//! - [`actions`] - [`OrderAction`] (confirm, ship, cancel)
//! - [`error`] - [`OrderError`]
//! - [`new()`] - creates the actor and its [`OrderClient`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The clients passed here are used by [`OrderClient`] to hydrate results;
/// the actor itself receives its dependencies when it is run.
pub fn new(
    capacity: usize,
    user_client: UserClient,
    product_client: ProductClient,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = OrderClient::new(generic_client, user_client, product_client);
    (actor, client)
}

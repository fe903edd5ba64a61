//! # User Actor
//!
//! The user directory: a [`ResourceActor<User>`](actor_framework::ResourceActor) with
//! no dependencies (`Context = ()`) and no custom actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - creates the actor and its [`UserClient`]
//!
//! ## Usage
//!
//! ```rust
//! use order_lifecycle::model::UserCreate;
//! use order_lifecycle::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate::new("Alice", "alice@example.com"))
//!         .await?;
//!     let alice = client.get_user(id).await?;
//!     assert_eq!(alice.email, "alice@example.com");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}

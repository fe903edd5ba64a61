//! # Actor Framework
//!
//! Building blocks for resource-oriented actor systems on Tokio. Each resource type
//! (users, products, orders) is owned by exactly one [`ResourceActor`], which processes
//! its mailbox one request at a time. Callers talk to it through a cloneable
//! [`ResourceClient`] and get their answer back on a oneshot channel.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type, its payloads, and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): the mailbox loop and the in-memory store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/reply.
//!
//! Business rules live in the entity hooks. The actor only sequences them, so any
//! check-then-modify performed inside a single hook or action cannot interleave with
//! another request to the same actor.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: u32,
//!     value: u32,
//! }
//!
//! #[derive(Debug)]
//! struct CounterCreate;
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = Infallible;
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, CounterError> {
//!         Ok(Self { id, value: 0 })
//!     }
//!
//!     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), CounterError> {
//!         match update {}
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
//!         match action {
//!             CounterAction::Increment => {
//!                 self.value += 1;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to an actor when it starts running, not when it is
//! constructed. Create every actor first, then start each one with the clients it
//! needs:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = ResourceActor::<User>::new(32);
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run((user_client, product_client)));
//! ```
//!
//! ## Errors
//!
//! Transport failures and missing ids are reported as [`FrameworkError`]. Errors
//! returned by entity hooks travel boxed in [`FrameworkError::EntityError`] and are
//! recovered with [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from scripted expectations,
//! so an actor whose hooks call other actors can be tested in isolation.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

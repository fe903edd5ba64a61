//! # ActorEntity Trait
//!
//! The contract every resource (user, product, order, …) implements to be managed by
//! the generic [`ResourceActor`](crate::ResourceActor). Associated types pin down the
//! id, the creation payload, the update payload, the custom actions, the injected
//! context, and the error type, so a `ProductCreate` can never reach the user actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! - [`ActorEntity::unique_key`] defaults to `None` (no uniqueness constraint).
//!
//! Entities whose state may only change through actions can use
//! [`std::convert::Infallible`] as their `Update` type; the actor then has no way to
//! receive an update for them.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is injected
/// into every hook when the actor is started with `run(context)`, which lets an
/// entity depend on clients created after the actor itself.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic sequential id generation, and
    /// ordered so that listings come back in id order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by all of its hooks and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across all stored entities of this type.
    ///
    /// The actor rejects a create whose key collides with an existing entity
    /// with [`FrameworkError::Conflict`](crate::FrameworkError::Conflict).
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// An error here aborts the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

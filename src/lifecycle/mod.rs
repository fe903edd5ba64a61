//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when they start
//! running. The order actor is started with `(UserClient, ProductClient)`; the
//! user and product actors take `()`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sending side of each mailbox
//! 2. **Actors drain** - `receiver.recv()` returns `None` once the queue is empty
//! 3. **Await completion** - [`OrderSystem::shutdown`] joins every actor task
//!
//! The order actor's context keeps the user and product actors alive until
//! the order actor itself stops. The dependency graph is acyclic, so closing
//! the order mailbox is enough to stop everything.
//!
//! ## Seeding
//!
//! [`seed()`] fills an empty system with demo users and products.

pub mod order_system;
pub mod seed;
pub mod tracing;

pub use self::order_system::*;
pub use self::seed::*;
pub use self::tracing::*;

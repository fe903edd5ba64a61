//! Plain data types managed by the actors.
//!
//! Each entity implements [`ActorEntity`](actor_framework::ActorEntity) in its actor
//! module (`user_actor`, `product_actor`, `order_actor`); this module only holds the
//! data, the typed ids, and the creation payloads.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

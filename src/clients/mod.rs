//! Domain clients wrapping [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client turns framework errors into its resource's error type, recovering
//! typed entity errors with
//! [`FrameworkError::downcast_entity`](actor_framework::FrameworkError::downcast_entity).

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::*;
pub use product_client::*;
pub use user_client::*;

//! # Order Lifecycle
//!
//! An order-management backend built from resource-oriented actors. Users,
//! products and orders each live in their own
//! [`ResourceActor`](actor_framework::ResourceActor); orders move through
//! `PENDING → CONFIRMED → SHIPPED`, or to `CANCELLED` from either of the first
//! two, while product stock is reserved on confirmation and returned on
//! cancellation.
//!
//! ## Module Tour
//!
//! - [`model`]: the data ([`User`](model::User), [`Product`](model::Product),
//!   [`Order`](model::Order)) and typed ids.
//! - [`user_actor`], [`product_actor`], [`order_actor`]: one
//!   [`ActorEntity`](actor_framework::ActorEntity) per resource. The order entity
//!   is the lifecycle engine.
//! - [`clients`]: typed wrappers that hide message passing and recover typed errors.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) wiring and shutdown,
//!   demo seeding, tracing setup.
//! - [`http`]: the axum REST boundary.
//! - [`config`]: environment configuration.
//!
//! ## Consistency
//!
//! All stock for all products is owned by the product actor, and reservation is a
//! single check-and-decrement message, so concurrent confirmations cannot
//! over-sell. Confirm and cancel are all-or-nothing: a failing line undoes the
//! stock changes already applied for the same call.
//!
//! ```rust
//! use order_lifecycle::lifecycle::OrderSystem;
//! use order_lifecycle::model::{OrderCreate, OrderStatus, ProductCreate, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderSystem::new();
//!     let user = system
//!         .user_client
//!         .create_user(UserCreate::new("Alice", "alice@example.com"))
//!         .await?;
//!     let product = system
//!         .product_client
//!         .create_product(ProductCreate::new("Widget", 100.0, 10))
//!         .await?;
//!
//!     let order = system
//!         .order_client
//!         .create_order(OrderCreate::new(user, [(product, 2)]))
//!         .await?;
//!     assert_eq!(order.total, 200.0);
//!
//!     let order = system.order_client.confirm_order(order.id).await?;
//!     assert_eq!(order.status, OrderStatus::Confirmed);
//!     assert_eq!(system.product_client.check_stock(product).await?, 8);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

//! [`ActorEntity`] implementation for [`Order`]: the order lifecycle engine.
//!
//! The order actor runs with `(UserClient, ProductClient)` as its context.
//!
//! - **Create** validates quantities, then (in `on_create`) resolves the user and
//!   every product, checks availability, snapshots unit prices and computes the
//!   total. No stock is touched.
//! - **Confirm** reserves stock line by line. If a line fails, the lines already
//!   reserved are released again and the order stays PENDING.
//! - **Cancel** of a CONFIRMED order releases every line. If a release fails, the
//!   lines already released are reserved again and the order stays CONFIRMED.
//!   Cancelling an already CANCELLED order is a no-op.
//! - **Ship** only changes the status.
//!
//! The order actor handles one message at a time, so transitions of the same
//! order never overlap; the product actor does the same for stock.

use super::actions::OrderAction;
use super::OrderError;
use crate::clients::{ProductClient, UserClient};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::{error, info, warn};

impl Order {
    fn check_transition(&self, to: OrderStatus) -> Result<(), OrderError> {
        if self.status.can_transition_to(to) {
            return Ok(());
        }
        if self.status == OrderStatus::Shipped && to == OrderStatus::Cancelled {
            return Err(OrderError::CannotCancelShipped(self.id));
        }
        Err(OrderError::InvalidStatus {
            from: self.status,
            to,
        })
    }

    fn set_status(&mut self, to: OrderStatus) {
        let from = self.status;
        self.status = to;
        self.updated_at = Utc::now();
        info!(order_id = %self.id, %from, %to, "Order status changed");
    }

    async fn reserve_items(&self, products: &ProductClient) -> Result<(), OrderError> {
        for (done, item) in self.items.iter().enumerate() {
            if let Err(e) = products.reserve_stock(item.product_id, item.quantity).await {
                let err = OrderError::from_product(item.product_id, e);
                warn!(order_id = %self.id, product_id = %item.product_id, error = %err, "Reservation failed, rolling back");
                for reserved in &self.items[..done] {
                    if let Err(e) = products
                        .release_stock(reserved.product_id, reserved.quantity)
                        .await
                    {
                        error!(order_id = %self.id, product_id = %reserved.product_id, error = %e, "Rollback release failed");
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    async fn release_items(&self, products: &ProductClient) -> Result<(), OrderError> {
        for (done, item) in self.items.iter().enumerate() {
            if let Err(e) = products.release_stock(item.product_id, item.quantity).await {
                let err = OrderError::from_product(item.product_id, e);
                warn!(order_id = %self.id, product_id = %item.product_id, error = %err, "Release failed, rolling back");
                for released in &self.items[..done] {
                    if let Err(e) = products
                        .reserve_stock(released.product_id, released.quantity)
                        .await
                    {
                        error!(order_id = %self.id, product_id = %released.product_id, error = %e, "Rollback reservation failed");
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (UserClient, ProductClient);
    type Error = OrderError;

    /// Builds a PENDING order with numbered lines. Prices and total are filled
    /// in by `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if let Some(line) = params.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::InvalidQuantity(line.product_id));
        }
        let items = params
            .items
            .iter()
            .zip(1..)
            .map(|(line, line_no)| OrderItem {
                order_id: id,
                line_no,
                product_id: line.product_id,
                quantity: line.quantity,
                price: 0.0,
            })
            .collect();
        let now = Utc::now();
        Ok(Self {
            id,
            user_id: params.user_id,
            total: 0.0,
            status: OrderStatus::Pending,
            items,
            created_at: now,
            updated_at: now,
        })
    }

    /// Resolves the user and products and prices the order. Fails on the first
    /// missing reference or short line.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (users, products) = ctx;

        users
            .get_user(self.user_id)
            .await
            .map_err(OrderError::from_user)?;

        for item in &mut self.items {
            let product_id = item.product_id;
            let product = products
                .get_product(product_id)
                .await
                .map_err(|e| OrderError::from_product(product_id, e))?;
            if item.quantity > product.stock {
                return Err(OrderError::InsufficientStock {
                    product_id,
                    requested: item.quantity,
                    available: product.stock,
                });
            }
            item.price = product.price;
        }

        self.total = self
            .items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();
        info!(order_id = %self.id, user_id = %self.user_id, total = self.total, lines = self.items.len(), "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<Order, Self::Error> {
        let (_, products) = ctx;
        if matches!(action, OrderAction::Cancel) && self.status == OrderStatus::Cancelled {
            info!(order_id = %self.id, "Order already cancelled");
            return Ok(self.clone());
        }
        let to = action.target();
        self.check_transition(to)?;

        match action {
            OrderAction::Confirm => self.reserve_items(products).await?,
            OrderAction::Cancel if self.status == OrderStatus::Confirmed => {
                self.release_items(products).await?
            }
            OrderAction::Cancel | OrderAction::Ship => {}
        }

        self.set_status(to);
        Ok(self.clone())
    }
}

//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products are created once and afterwards change only through
//! [`ProductAction`]s; there is no update payload.

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Rejects a blank name or a negative / non-finite price.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::ValidationError(format!(
                "price must be a non-negative number, got {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price: params.price,
            stock: params.stock,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    /// Handles the stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: returns the stock level unchanged
    /// - `SetStock`: replaces the stock level
    /// - `ReserveStock`: decrements if `requested <= stock`, otherwise fails
    /// - `ReleaseStock`: increments, failing on overflow
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::SetStock(stock) => {
                self.stock = stock;
                Ok(ProductActionResult::SetStock(self.stock))
            }
            ProductAction::ReserveStock(requested) => {
                if requested > self.stock {
                    return Err(ProductError::InsufficientStock {
                        requested,
                        available: self.stock,
                    });
                }
                self.stock -= requested;
                Ok(ProductActionResult::ReserveStock(self.stock))
            }
            ProductAction::ReleaseStock(released) => {
                self.stock = self
                    .stock
                    .checked_add(released)
                    .ok_or(ProductError::StockOverflow {
                        stock: self.stock,
                        released,
                    })?;
                Ok(ProductActionResult::ReleaseStock(self.stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: u32) -> Product {
        Product::from_create_params(ProductId(1), ProductCreate::new("Widget", 25.0, stock))
            .unwrap()
    }

    #[test]
    fn rejects_invalid_create_params() {
        for params in [
            ProductCreate::new(" ", 1.0, 1),
            ProductCreate::new("Widget", -0.01, 1),
            ProductCreate::new("Widget", f64::NAN, 1),
            ProductCreate::new("Widget", f64::INFINITY, 1),
        ] {
            let err = Product::from_create_params(ProductId(1), params).unwrap_err();
            assert!(matches!(err, ProductError::ValidationError(_)));
        }
    }

    #[tokio::test]
    async fn reserve_allows_exact_stock() {
        let mut product = widget(5);
        let result = product
            .handle_action(ProductAction::ReserveStock(5), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::ReserveStock(0));
        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn reserve_beyond_stock_leaves_it_untouched() {
        let mut product = widget(5);
        let err = product
            .handle_action(ProductAction::ReserveStock(6), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                requested: 6,
                available: 5
            }
        );
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn release_and_set_stock() {
        let mut product = widget(5);
        let result = product
            .handle_action(ProductAction::ReleaseStock(3), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::ReleaseStock(8));

        let result = product
            .handle_action(ProductAction::SetStock(2), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::SetStock(2));

        let result = product
            .handle_action(ProductAction::CheckStock, &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::CheckStock(2));
    }

    #[tokio::test]
    async fn release_overflow_is_rejected() {
        let mut product = widget(u32::MAX - 1);
        let err = product
            .handle_action(ProductAction::ReleaseStock(2), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::StockOverflow { .. }));
        assert_eq!(product.stock, u32::MAX - 1);
    }
}

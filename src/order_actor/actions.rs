//! Lifecycle actions for the Order actor.

use crate::model::OrderStatus;

/// Status transitions an order can be asked to make.
///
/// Each action returns the updated [`Order`](crate::model::Order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// PENDING → CONFIRMED, reserving stock for every line.
    Confirm,
    /// CONFIRMED → SHIPPED.
    Ship,
    /// PENDING | CONFIRMED → CANCELLED, returning stock if it was reserved.
    Cancel,
}

impl OrderAction {
    /// The status the order ends up in when the action succeeds.
    pub fn target(self) -> OrderStatus {
        match self {
            OrderAction::Confirm => OrderStatus::Confirmed,
            OrderAction::Ship => OrderStatus::Shipped,
            OrderAction::Cancel => OrderStatus::Cancelled,
        }
    }
}

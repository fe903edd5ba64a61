use crate::model::{Product, ProductId, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// ```text
/// PENDING ──confirm──▶ CONFIRMED ──ship──▶ SHIPPED
///    │                     │
///    └──cancel──▶ CANCELLED ◀──cancel──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Whether the state machine has an edge from `self` to `next`.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Shipped) | (Confirmed, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// A customer order with its line items.
///
/// `total` is computed once at creation from the price snapshots in `items`
/// and never recalculated. `status` only moves along the edges allowed by
/// [`OrderStatus::can_transition_to`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of an order. `price` is the product's unit price when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    /// 1-based position within the order.
    pub line_no: u32,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// A requested product and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
}

impl OrderCreate {
    pub fn new(user_id: UserId, items: impl IntoIterator<Item = (ProductId, u32)>) -> Self {
        Self {
            user_id,
            items: items
                .into_iter()
                .map(|(product_id, quantity)| OrderLine {
                    product_id,
                    quantity,
                })
                .collect(),
        }
    }
}

/// An order with its user and products resolved, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub user_id: UserId,
    pub user: User,
    pub total: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItemDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemDetails {
    pub order_id: OrderId,
    pub line_no: u32,
    pub product_id: ProductId,
    pub product: Product,
    pub quantity: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn allowed_transitions_follow_the_lifecycle() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Shipped));
        assert!(Confirmed.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Shipped));
        assert!(!Confirmed.can_transition_to(Confirmed));
        for next in [Pending, Confirmed, Shipped, Cancelled] {
            assert!(!Shipped.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Confirmed).unwrap(), "\"CONFIRMED\"");
        assert_eq!(Cancelled.to_string(), "CANCELLED");
        let parsed: OrderStatus = serde_json::from_str("\"SHIPPED\"").unwrap();
        assert_eq!(parsed, Shipped);
    }

    #[test]
    fn ids_are_bare_numbers_on_the_wire() {
        assert_eq!(serde_json::to_string(&OrderId(7)).unwrap(), "7");
        assert_eq!(OrderId(7).to_string(), "order_7");

        let create: OrderCreate =
            serde_json::from_str(r#"{"user_id":1,"items":[{"product_id":2,"quantity":3}]}"#)
                .unwrap();
        assert_eq!(create.user_id, UserId(1));
        assert_eq!(
            create.items,
            vec![OrderLine {
                product_id: ProductId(2),
                quantity: 3
            }]
        );
    }
}

//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Validation, pricing and stock movements happen inside the actor (see
//! [`order_actor::entity`](crate::order_actor::entity)); this client sends the
//! requests and hydrates every result into an [`OrderDetails`].
use crate::clients::{ProductClient, UserClient};
use crate::model::{
    Order, OrderCreate, OrderDetails, OrderId, OrderItemDetails, Product, ProductId, User,
    UserId,
};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    users: UserClient,
    products: ProductClient,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

/// Per-call lookup cache so a listing resolves each user and product once.
#[derive(Default)]
struct Hydrator {
    users: HashMap<UserId, User>,
    products: HashMap<ProductId, Product>,
}

impl Hydrator {
    async fn hydrate(
        &mut self,
        order: Order,
        users: &UserClient,
        products: &ProductClient,
    ) -> Result<OrderDetails, OrderError> {
        let user = match self.users.get(&order.user_id) {
            Some(user) => user.clone(),
            None => {
                let user = users
                    .get_user(order.user_id)
                    .await
                    .map_err(OrderError::from_user)?;
                self.users.insert(order.user_id, user.clone());
                user
            }
        };

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let product = match self.products.get(&item.product_id) {
                Some(product) => product.clone(),
                None => {
                    let product = products
                        .get_product(item.product_id)
                        .await
                        .map_err(|e| OrderError::from_product(item.product_id, e))?;
                    self.products.insert(item.product_id, product.clone());
                    product
                }
            };
            items.push(OrderItemDetails {
                order_id: item.order_id,
                line_no: item.line_no,
                product_id: item.product_id,
                product,
                quantity: item.quantity,
                price: item.price,
            });
        }

        Ok(OrderDetails {
            id: order.id,
            user_id: order.user_id,
            user,
            total: order.total,
            status: order.status,
            items,
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, users: UserClient, products: ProductClient) -> Self {
        Self {
            inner,
            users,
            products,
        }
    }

    async fn hydrate(&self, order: Order) -> Result<OrderDetails, OrderError> {
        Hydrator::default()
            .hydrate(order, &self.users, &self.products)
            .await
    }

    async fn hydrate_all(&self, orders: Vec<Order>) -> Result<Vec<OrderDetails>, OrderError> {
        let mut hydrator = Hydrator::default();
        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            details.push(hydrator.hydrate(order, &self.users, &self.products).await?);
        }
        Ok(details)
    }

    async fn transition(&self, id: OrderId, action: OrderAction) -> Result<OrderDetails, OrderError> {
        debug!(?action, "Sending request");
        let order = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::OrderNotFound(id),
                other => Self::map_error(other),
            })?;
        self.hydrate(order).await
    }

    /// Places an order in PENDING. Nothing is stored if any line fails validation.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderDetails, OrderError> {
        info!("Sending create_order to actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get_order(id).await
    }

    /// PENDING → CONFIRMED, reserving stock for every line (all or nothing).
    #[instrument(skip(self))]
    pub async fn confirm_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        self.transition(id, OrderAction::Confirm).await
    }

    /// CONFIRMED → SHIPPED.
    #[instrument(skip(self))]
    pub async fn ship_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        self.transition(id, OrderAction::Ship).await
    }

    /// PENDING | CONFIRMED → CANCELLED. Stock reserved at confirmation is returned.
    /// Cancelling a cancelled order returns it unchanged.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        self.transition(id, OrderAction::Cancel).await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        let order = self.get(id).await?.ok_or(OrderError::OrderNotFound(id))?;
        self.hydrate(order).await
    }

    /// Every order, by id.
    pub async fn list_orders(&self) -> Result<Vec<OrderDetails>, OrderError> {
        let orders = self.list().await?;
        self.hydrate_all(orders).await
    }

    /// Orders placed by `user_id`, by id. Empty if the user has none or does not exist.
    #[instrument(skip(self))]
    pub async fn list_orders_by_user(&self, user_id: UserId) -> Result<Vec<OrderDetails>, OrderError> {
        let orders = self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect();
        self.hydrate_all(orders).await
    }
}

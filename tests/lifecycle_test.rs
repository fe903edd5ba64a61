use order_lifecycle::lifecycle::OrderSystem;
use order_lifecycle::model::{
    OrderCreate, OrderId, OrderStatus, ProductCreate, ProductId, UserCreate, UserId,
};
use order_lifecycle::order_actor::OrderError;
use order_lifecycle::user_actor::UserError;

async fn setup(price: f64, stock: u32) -> (OrderSystem, UserId, ProductId) {
    let system = OrderSystem::new();
    let user = system
        .user_client
        .create_user(UserCreate::new("Juan Pérez", "juan@example.com"))
        .await
        .unwrap();
    let product = system
        .product_client
        .create_product(ProductCreate::new("Laptop", price, stock))
        .await
        .unwrap();
    (system, user, product)
}

async fn stock(system: &OrderSystem, product: ProductId) -> u32 {
    system.product_client.check_stock(product).await.unwrap()
}

#[tokio::test]
async fn test_confirm_then_cancel_restores_stock() {
    let (system, user, product) = setup(100.0, 10).await;
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, [(product, 2)]))
        .await
        .unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 200.0);
    assert_eq!(order.user.email, "juan@example.com");
    assert_eq!(order.items[0].price, 100.0);
    assert_eq!(order.items[0].product.name, "Laptop");
    assert_eq!(stock(&system, product).await, 10);

    let order = orders.confirm_order(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert!(order.updated_at >= order.created_at);
    assert_eq!(stock(&system, product).await, 8);

    let order = orders.cancel_order(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(stock(&system, product).await, 10);

    // A second cancel must not hand the stock back twice.
    let order = orders.cancel_order(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(stock(&system, product).await, 10);

    assert_eq!(
        orders.ship_order(order.id).await.unwrap_err(),
        OrderError::InvalidStatus {
            from: OrderStatus::Cancelled,
            to: OrderStatus::Shipped
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ship_is_final() {
    let (system, user, product) = setup(100.0, 10).await;
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, [(product, 4)]))
        .await
        .unwrap();
    assert_eq!(
        orders.ship_order(order.id).await.unwrap_err(),
        OrderError::InvalidStatus {
            from: OrderStatus::Pending,
            to: OrderStatus::Shipped
        }
    );

    orders.confirm_order(order.id).await.unwrap();
    let shipped = orders.ship_order(order.id).await.unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);

    assert_eq!(
        orders.cancel_order(order.id).await.unwrap_err(),
        OrderError::CannotCancelShipped(order.id)
    );
    assert!(matches!(
        orders.ship_order(order.id).await,
        Err(OrderError::InvalidStatus { .. })
    ));
    assert_eq!(stock(&system, product).await, 6);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_confirm_twice_fails() {
    let (system, user, product) = setup(10.0, 10).await;
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, [(product, 3)]))
        .await
        .unwrap();
    orders.confirm_order(order.id).await.unwrap();
    assert_eq!(
        orders.confirm_order(order.id).await.unwrap_err(),
        OrderError::InvalidStatus {
            from: OrderStatus::Confirmed,
            to: OrderStatus::Confirmed
        }
    );
    assert_eq!(stock(&system, product).await, 7);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_pending_leaves_stock_and_repeat_is_a_no_op() {
    let (system, user, product) = setup(10.0, 10).await;
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, [(product, 3)]))
        .await
        .unwrap();
    let cancelled = orders.cancel_order(order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(stock(&system, product).await, 10);

    let again = orders.cancel_order(order.id).await.unwrap();
    assert_eq!(again.status, OrderStatus::Cancelled);
    assert_eq!(again.updated_at, cancelled.updated_at);
    assert_eq!(stock(&system, product).await, 10);

    assert!(matches!(
        orders.confirm_order(order.id).await,
        Err(OrderError::InvalidStatus { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_rejections_store_nothing() {
    let (system, user, product) = setup(100.0, 10).await;
    let orders = &system.order_client;

    assert_eq!(
        orders
            .create_order(OrderCreate::new(user, [(product, 20)]))
            .await
            .unwrap_err(),
        OrderError::InsufficientStock {
            product_id: product,
            requested: 20,
            available: 10
        }
    );
    assert_eq!(
        orders
            .create_order(OrderCreate::new(UserId(99), [(product, 1)]))
            .await
            .unwrap_err(),
        OrderError::UserNotFound(UserId(99))
    );
    assert_eq!(
        orders
            .create_order(OrderCreate::new(user, [(product, 1), (ProductId(42), 1)]))
            .await
            .unwrap_err(),
        OrderError::ProductNotFound(ProductId(42))
    );
    assert_eq!(
        orders
            .create_order(OrderCreate::new(user, [(product, 0)]))
            .await
            .unwrap_err(),
        OrderError::InvalidQuantity(product)
    );

    assert!(orders.list_orders().await.unwrap().is_empty());
    assert_eq!(stock(&system, product).await, 10);

    // Exactly the stock on hand is fine.
    let order = orders
        .create_order(OrderCreate::new(user, [(product, 10)]))
        .await
        .unwrap();
    assert_eq!(order.total, 1000.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_multi_line_total_uses_price_snapshots() {
    let (system, user, laptop) = setup(100.0, 10).await;
    let mouse = system
        .product_client
        .create_product(ProductCreate::new("Mouse", 25.5, 50))
        .await
        .unwrap();

    let order = system
        .order_client
        .create_order(OrderCreate::new(user, [(laptop, 2), (mouse, 3)]))
        .await
        .unwrap();
    assert_eq!(order.total, 276.5);
    let lines: Vec<_> = order
        .items
        .iter()
        .map(|i| (i.line_no, i.product_id, i.quantity, i.price))
        .collect();
    assert_eq!(lines, vec![(1, laptop, 2, 100.0), (2, mouse, 3, 25.5)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_confirm_rolls_back_earlier_lines() {
    let (system, user, laptop) = setup(100.0, 10).await;
    let mouse = system
        .product_client
        .create_product(ProductCreate::new("Mouse", 20.0, 5))
        .await
        .unwrap();
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, [(laptop, 3), (mouse, 5)]))
        .await
        .unwrap();

    // Stock drops after the order was placed.
    system.product_client.set_stock(mouse, 2).await.unwrap();

    assert_eq!(
        orders.confirm_order(order.id).await.unwrap_err(),
        OrderError::InsufficientStock {
            product_id: mouse,
            requested: 5,
            available: 2
        }
    );
    assert_eq!(stock(&system, laptop).await, 10);
    assert_eq!(stock(&system, mouse).await, 2);
    let order = orders.get_order(order.id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    // Restocking makes the same order confirmable.
    system.product_client.set_stock(mouse, 5).await.unwrap();
    orders.confirm_order(order.id).await.unwrap();
    assert_eq!(stock(&system, laptop).await, 7);
    assert_eq!(stock(&system, mouse).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_confirms_never_oversell() {
    let (system, user, product) = setup(10.0, 5).await;

    let mut ids = Vec::new();
    for _ in 0..8 {
        let order = system
            .order_client
            .create_order(OrderCreate::new(user, [(product, 1)]))
            .await
            .unwrap();
        ids.push(order.id);
    }

    let tasks: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let orders = system.order_client.clone();
            tokio::spawn(async move { orders.confirm_order(id).await })
        })
        .collect();

    let mut confirmed = 0;
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => confirmed += 1,
            Err(OrderError::InsufficientStock { available: 0, .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(confirmed, 5);
    assert_eq!(rejected, 3);
    assert_eq!(stock(&system, product).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_accepted() {
    let (system, user, product) = setup(10.0, 5).await;
    let orders = &system.order_client;

    let order = orders
        .create_order(OrderCreate::new(user, []))
        .await
        .unwrap();
    assert_eq!(order.total, 0.0);
    assert!(order.items.is_empty());

    orders.confirm_order(order.id).await.unwrap();
    orders.cancel_order(order.id).await.unwrap();
    assert_eq!(stock(&system, product).await, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reads_are_hydrated_and_ordered() {
    let (system, juan, product) = setup(10.0, 50).await;
    let maria = system
        .user_client
        .create_user(UserCreate::new("María García", "maria@example.com"))
        .await
        .unwrap();
    let orders = &system.order_client;

    for (user, qty) in [(juan, 1), (maria, 2), (juan, 3)] {
        orders
            .create_order(OrderCreate::new(user, [(product, qty)]))
            .await
            .unwrap();
    }

    let all = orders.list_orders().await.unwrap();
    let ids: Vec<_> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![OrderId(1), OrderId(2), OrderId(3)]);
    assert_eq!(all[1].user.name, "María García");

    let juans: Vec<_> = orders
        .list_orders_by_user(juan)
        .await
        .unwrap()
        .into_iter()
        .map(|o| (o.id, o.items[0].quantity))
        .collect();
    assert_eq!(juans, vec![(OrderId(1), 1), (OrderId(3), 3)]);

    assert!(orders
        .list_orders_by_user(UserId(99))
        .await
        .unwrap()
        .is_empty());

    assert_eq!(
        orders.get_order(OrderId(99)).await.unwrap_err(),
        OrderError::OrderNotFound(OrderId(99))
    );
    assert_eq!(
        orders.confirm_order(OrderId(99)).await.unwrap_err(),
        OrderError::OrderNotFound(OrderId(99))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_email_is_unique() {
    let (system, _, _) = setup(10.0, 1).await;

    let err = system
        .user_client
        .create_user(UserCreate::new("Another Juan", "JUAN@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyExists("juan@example.com".into()));
    assert_eq!(system.user_client.list_users().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

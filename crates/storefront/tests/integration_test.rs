use resource_actor::ActorClient;
use storefront::category_actor::CategoryError;
use storefront::lifecycle::StoreSystem;
use storefront::model::{CategoryCreate, OrderCreate, ProductCreate, UserCreate};
use storefront::order_actor::OrderError;
use storefront::product_actor::ProductError;
use storefront::user_actor::UserError;

fn category(slug: &str) -> CategoryCreate {
    CategoryCreate {
        name: "Electronics".to_string(),
        slug: slug.to_string(),
        description: Some("Gadgets".to_string()),
    }
}

fn product(slug: &str, category_id: storefront::model::CategoryId) -> ProductCreate {
    ProductCreate {
        name: "Super Widget".to_string(),
        slug: slug.to_string(),
        description: "A very super widget".to_string(),
        price: 25.50,
        inventory: 100,
        category_id,
    }
}

/// Full end-to-end flow with all real actors.
#[tokio::test]
async fn test_full_store_flow() {
    let system = StoreSystem::new();

    // Register a user
    let user_id = system
        .user_client
        .register_user(UserCreate {
            email: "Alice@Example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        })
        .await
        .expect("Failed to register user");

    // E-mail is folded to lowercase at write time
    let user = system
        .user_client
        .get(user_id)
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_admin);

    // Create a category, then a product referencing it
    let category_id = system
        .category_client
        .create_category(category("electronics"))
        .await
        .expect("Failed to create category");

    let product_id = system
        .product_client
        .create_product(product("super-widget", category_id))
        .await
        .expect("Failed to create product");

    let created = system
        .product_client
        .find_by_slug("super-widget".to_string())
        .await
        .expect("Failed to look up product")
        .expect("Product not found by slug");
    assert_eq!(created.id, product_id);
    assert_eq!(created.inventory, 100);
    assert!(created.is_active);

    // Place an order: validates the user, reserves stock, computes the total
    let order_id = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            product_id,
            quantity: 5,
        })
        .await
        .expect("Failed to create order");

    let order = system
        .order_client
        .get(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.user_id, user_id);
    assert_eq!(order.quantity, 5);
    assert_eq!(order.total, 127.50);
    assert_eq!(order.status, "Created");

    // Stock was decremented
    let after_order = system
        .product_client
        .get(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_order.inventory, 95);

    // An order larger than the remaining stock fails and changes nothing
    let result = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            product_id,
            quantity: 200,
        })
        .await;
    assert!(matches!(result, Err(OrderError::InsufficientStock(_))));

    let after_failure = system
        .product_client
        .get(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after_failure.inventory, 95);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_duplicate_slugs_and_emails_are_refused() {
    let system = StoreSystem::new();

    system
        .category_client
        .create_category(category("books"))
        .await
        .unwrap();
    let dup = system
        .category_client
        .create_category(category("books"))
        .await;
    assert!(matches!(dup, Err(CategoryError::AlreadyExists(slug)) if slug == "books"));

    system
        .user_client
        .register_user(UserCreate {
            email: "bob@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        })
        .await
        .unwrap();
    let dup = system
        .user_client
        .register_user(UserCreate {
            email: "BOB@example.com".to_string(),
            password_hash: "$2b$12$other".to_string(),
        })
        .await;
    assert!(matches!(dup, Err(UserError::AlreadyExists(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_creation_requires_existing_category() {
    let system = StoreSystem::new();

    let result = system
        .product_client
        .create_product(product(
            "orphan-widget",
            storefront::model::CategoryId::from(999),
        ))
        .await;
    assert!(matches!(result, Err(ProductError::InvalidCategory(_))));

    // Nothing was stored
    let found = system
        .product_client
        .find_by_slug("orphan-widget".to_string())
        .await
        .unwrap();
    assert!(found.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_rejects_unknown_user_and_zero_quantity() {
    let system = StoreSystem::new();

    let category_id = system
        .category_client
        .create_category(category("tools"))
        .await
        .unwrap();
    let product_id = system
        .product_client
        .create_product(product("hammer", category_id))
        .await
        .unwrap();

    let unknown_user = system
        .order_client
        .create_order(OrderCreate {
            user_id: storefront::model::UserId::from(42),
            product_id,
            quantity: 1,
        })
        .await;
    assert!(matches!(unknown_user, Err(OrderError::InvalidUser(_))));

    let user_id = system
        .user_client
        .register_user(UserCreate {
            email: "carol@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        })
        .await
        .unwrap();

    let zero = system
        .order_client
        .create_order(OrderCreate {
            user_id,
            product_id,
            quantity: 0,
        })
        .await;
    assert!(matches!(zero, Err(OrderError::ValidationError(_))));

    system.shutdown().await.unwrap();
}

/// Concurrent orders may never reserve the same units twice.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = StoreSystem::new();

    let user_id = system
        .user_client
        .register_user(UserCreate {
            email: "dave@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        })
        .await
        .unwrap();

    let category_id = system
        .category_client
        .create_category(category("limited"))
        .await
        .unwrap();
    let mut limited = product("limited-widget", category_id);
    limited.inventory = 20;
    let product_id = system.product_client.create_product(limited).await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .create_order(OrderCreate {
                    user_id,
                    product_id,
                    quantity: 2,
                })
                .await
        }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }

    // 20 stock / 2 per order: all ten fit, and the stock is exactly consumed.
    assert_eq!(successful, 10, "Expected exactly 10 successful orders");
    let final_product = system
        .product_client
        .get(product_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(final_product.inventory, 0, "All stock should be consumed");

    // The order count feeds the admin user listing.
    let orders = system.order_client.list().await.unwrap();
    assert_eq!(
        orders.iter().filter(|o| o.user_id == user_id).count(),
        10
    );

    system.shutdown().await.unwrap();
}

//! End-to-end tests through the axum router: real actors, real handlers,
//! requests dispatched with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use storefront::config::Config;
use storefront::http::{self, AppState};
use storefront::lifecycle::StoreSystem;

fn test_app() -> Router {
    let system = StoreSystem::new();
    let state = AppState::new(
        &system,
        Config {
            port: 0,
            auth_secret: "test-secret".to_string(),
        },
    );
    // The router's client clones keep the actors alive for the test's
    // lifetime; the system handle itself is not needed.
    http::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

/// Create the category fixture most product tests need; returns its id.
async fn create_category(app: &Router, name: &str, slug: &str) -> u32 {
    let (status, body) = post(
        app,
        "/api/categories",
        json!({ "name": name, "slug": slug }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().unwrap() as u32
}

// --- Categories ---

#[tokio::test]
async fn category_create_and_duplicate_conflict() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/categories",
        json!({ "name": "Electronics", "slug": "electronics" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Electronics");
    assert_eq!(body["slug"], "electronics");
    assert!(body["id"].is_number());
    assert!(body["createdAt"].is_string());

    let (status, body) = post(
        &app,
        "/api/categories",
        json!({ "name": "Electronics 2", "slug": "electronics" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A category with this slug already exists");
}

#[tokio::test]
async fn category_validation_produces_field_errors() {
    let app = test_app();

    // Bad slug pattern
    let (status, body) = post(
        &app,
        "/api/categories",
        json!({ "name": "Electronics", "slug": "Bad Slug!" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["slug"],
        "Slug must contain only lowercase letters, numbers, and hyphens"
    );

    // Missing name behaves like an empty one
    let (status, body) = post(&app, "/api/categories", json!({ "slug": "ok-slug" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"], "Name must be at least 2 characters");

    // Short slug reports the length message, not the pattern one
    let (status, body) = post(
        &app,
        "/api/categories",
        json!({ "name": "Electronics", "slug": "x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["slug"], "Slug must be at least 2 characters");
}

#[tokio::test]
async fn category_list_is_newest_first() {
    let app = test_app();
    create_category(&app, "First", "first").await;
    create_category(&app, "Second", "second").await;

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Ordering is by createdAt descending; same-instant creations tie.
    let parse = |v: &serde_json::Value| {
        chrono::DateTime::parse_from_rfc3339(v.as_str().unwrap()).unwrap()
    };
    assert!(parse(&items[0]["createdAt"]) >= parse(&items[1]["createdAt"]));
}

#[tokio::test]
async fn category_products_page() {
    let app = test_app();
    let category_id = create_category(&app, "Audio", "audio").await;
    let other_id = create_category(&app, "Video", "video").await;

    for (name, slug, cat) in [
        ("Speaker", "speaker", category_id),
        ("Amp", "amp", category_id),
        ("Camera", "camera", other_id),
    ] {
        let (status, _) = post(
            &app,
            "/api/products",
            json!({
                "name": name, "slug": slug, "description": "desc",
                "price": 10, "inventory": 5, "categoryId": cat
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/categories/audio/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["slug"], "audio");
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Amp"); // name ascending
    assert_eq!(products[1]["name"], "Speaker");

    let (status, body) = get(&app, "/api/categories/nope/products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}

// --- Products ---

#[tokio::test]
async fn product_create_names_the_missing_field() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let full = json!({
        "name": "Widget", "slug": "widget", "description": "desc",
        "price": 9.99, "inventory": 3, "categoryId": category_id
    });

    for field in ["name", "slug", "description", "price", "inventory", "categoryId"] {
        let mut body = full.clone();
        body.as_object_mut().unwrap().remove(field);
        let (status, response) = post(&app, "/api/products", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {field}");
        assert_eq!(
            response["error"],
            format!("Missing required field: {field}")
        );
    }
}

#[tokio::test]
async fn product_create_validates_numbers_and_category() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": -1, "inventory": 3, "categoryId": category_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Price must be a positive number");

    let (status, body) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": 9.99, "inventory": 2.5, "categoryId": category_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Inventory must be a positive integer");

    let (status, body) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": 9.99, "inventory": 3, "categoryId": 999
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid category");
}

#[tokio::test]
async fn product_duplicate_slug_is_bad_request() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let body = json!({
        "name": "Widget", "slug": "widget", "description": "desc",
        "price": 9.99, "inventory": 3, "categoryId": category_id
    });

    let (status, created) = post(&app, "/api/products", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "widget");
    assert_eq!(created["category"]["slug"], "gadgets");
    assert_eq!(created["isActive"], true);

    let (status, dup) = post(&app, "/api/products", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(dup["error"], "A product with this slug already exists");
}

#[tokio::test]
async fn product_create_coerces_numeric_strings() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": "9.99", "inventory": "7", "categoryId": category_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["inventory"], 7);
}

#[tokio::test]
async fn product_delete_paths() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let (_, created) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": 9.99, "inventory": 3, "categoryId": category_id
        }),
    )
    .await;
    let id = created["id"].as_u64().unwrap();

    let (status, body) = delete(&app, "/api/products").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product ID is required");

    let (status, body) = delete(&app, "/api/products?id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, body) = delete(&app, &format!("/api/products?id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = delete(&app, &format!("/api/products?id={id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_edit_flow_with_slug_rename() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "old-slug", "description": "desc",
            "price": 5, "inventory": 3, "categoryId": category_id
        }),
    )
    .await;

    // GET by slug, full category join
    let (status, body) = get(&app, "/api/products/edit/old-slug").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["slug"], "old-slug");
    assert_eq!(body["product"]["category"]["name"], "Gadgets");

    // Unknown slug
    let (status, _) = get(&app, "/api/products/edit/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Missing name/price
    let (status, body) = post(
        &app,
        "/api/products/edit/old-slug",
        json!({ "description": "only description" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(body["required"], json!(["name", "price"]));

    // Rename with string-typed price coercion
    let (status, body) = post(
        &app,
        "/api/products/edit/old-slug",
        json!({ "name": "X", "price": "9.99", "newSlug": "new-slug" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["product"]["slug"], "new-slug");
    assert_eq!(body["product"]["name"], "X");
    assert_eq!(body["product"]["price"], 9.99);
    // Description was absent in the payload: full-replace clears it.
    assert_eq!(body["product"]["description"], Value::Null);
    // Fields absent from the payload keep their values.
    assert_eq!(body["product"]["inventory"], 3);

    // The old slug is gone
    let (status, _) = get(&app, "/api/products/edit/old-slug").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/products/edit/new-slug").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn product_rename_onto_taken_slug_is_refused() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    for slug in ["one", "two"] {
        post(
            &app,
            "/api/products",
            json!({
                "name": slug, "slug": slug, "description": "desc",
                "price": 5, "inventory": 3, "categoryId": category_id
            }),
        )
        .await;
    }

    let (status, body) = post(
        &app,
        "/api/products/edit/one",
        json!({ "name": "one", "price": 5, "newSlug": "two" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A product with this slug already exists");

    // The product under edit kept its slug
    let (status, _) = get(&app, "/api/products/edit/one").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn product_list_joins_category_summaries_by_name() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    for (name, slug) in [("Zeta", "zeta"), ("Alpha", "alpha")] {
        post(
            &app,
            "/api/products",
            json!({
                "name": name, "slug": slug, "description": "desc",
                "price": 5, "inventory": 3, "categoryId": category_id
            }),
        )
        .await;
    }

    let (status, body) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Alpha");
    assert_eq!(items[1]["name"], "Zeta");
    assert_eq!(items[0]["category"]["name"], "Gadgets");
    // Summary shape only: no timestamps on the joined category.
    assert!(items[0]["category"]["createdAt"].is_null());
}

// --- Auth & users ---

#[tokio::test]
async fn register_never_returns_the_credential() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "Alice@Example.com", "password": "hunter2" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["isAdmin"], false);
    let object = body.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("passwordHash"));

    let (status, body) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "other" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this email already exists");

    let (status, body) = post(&app, "/api/auth/register", json!({ "email": "x@y.z" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn login_does_not_reveal_which_part_was_wrong() {
    let app = test_app();

    post(
        &app,
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "hunter2" }),
    )
    .await;

    let (status, wrong_password) = post(
        &app,
        "/api/auth/login",
        json!({ "email": "alice@example.com", "password": "nope" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_email) = post(
        &app,
        "/api/auth/login",
        json!({ "email": "ghost@example.com", "password": "nope" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["error"], "Invalid email or password");

    let (status, body) = post(&app, "/api/auth/login", json!({ "email": "a@b.c" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn login_issues_a_decodable_token() {
    let app = test_app();

    post(
        &app,
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "hunter2" }),
    )
    .await;

    // Login is case-insensitive on the e-mail.
    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "email": "ALICE@example.com", "password": "hunter2" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(!body["user"].as_object().unwrap().contains_key("password"));

    let token = body["token"].as_str().unwrap();
    let claims = storefront::auth::decode_token(token, "test-secret").unwrap();
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[tokio::test]
async fn user_admin_surface() {
    let app = test_app();

    let (_, created) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "hunter2" }),
    )
    .await;
    let user_id = created["id"].as_u64().unwrap();

    let (status, body) = get(&app, &format!("/api/users/edit/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");

    let (status, body) = get(&app, "/api/users/edit/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["orderCount"], 0);
    assert!(!users[0].as_object().unwrap().contains_key("password"));

    let (status, body) = delete(&app, &format!("/api/users/edit/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, _) = get(&app, &format!("/api/users/edit/{user_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- Orders ---

#[tokio::test]
async fn order_flow_reserves_stock_and_feeds_order_count() {
    let app = test_app();
    let category_id = create_category(&app, "Gadgets", "gadgets").await;

    let (_, product) = post(
        &app,
        "/api/products",
        json!({
            "name": "Widget", "slug": "widget", "description": "desc",
            "price": 4.5, "inventory": 10, "categoryId": category_id
        }),
    )
    .await;
    let product_id = product["id"].as_u64().unwrap();

    let (_, user) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "hunter2" }),
    )
    .await;
    let user_id = user["id"].as_u64().unwrap();

    let (status, order) = post(
        &app,
        "/api/orders",
        json!({ "userId": user_id, "productId": product_id, "quantity": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["quantity"], 4);
    assert_eq!(order["total"], 18.0);
    assert_eq!(order["status"], "Created");

    // Inventory went down
    let (_, body) = get(&app, "/api/products/edit/widget").await;
    assert_eq!(body["product"]["inventory"], 6);

    // Too large an order fails without changing stock
    let (status, body) = post(
        &app,
        "/api/orders",
        json!({ "userId": user_id, "productId": product_id, "quantity": 100 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Insufficient stock"));
    let (_, body) = get(&app, "/api/products/edit/widget").await;
    assert_eq!(body["product"]["inventory"], 6);

    // Unknown user
    let (status, body) = post(
        &app,
        "/api/orders",
        json!({ "userId": 999, "productId": product_id, "quantity": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user");

    // The user listing reflects the one successful order
    let (_, body) = get(&app, "/api/users").await;
    assert_eq!(body.as_array().unwrap()[0]["orderCount"], 1);
}

//! # HTTP Layer
//!
//! Thin axum handlers over the resource clients: one module per resource,
//! mirroring the API paths. Handlers validate the request at the boundary,
//! make one or two client calls, and serialise the JSON response; every
//! failure path goes through [`ApiError`](error::ApiError).

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::clients::{CategoryClient, OrderClient, ProductClient, UserClient};
use crate::config::Config;
use crate::lifecycle::StoreSystem;

pub mod auth;
pub mod categories;
pub mod error;
pub mod orders;
pub mod products;
pub mod users;

pub use error::ApiError;

/// Shared handler state: the resource clients plus configuration.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryClient,
    pub products: ProductClient,
    pub users: UserClient,
    pub orders: OrderClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(system: &StoreSystem, config: Config) -> Self {
        Self {
            categories: system.category_client.clone(),
            products: system.product_client.clone(),
            users: system.user_client.clone(),
            orders: system.order_client.clone(),
            config: Arc::new(config),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/:slug/products",
            get(categories::products_by_slug),
        )
        .route(
            "/api/products",
            get(products::list)
                .post(products::create)
                .delete(products::remove),
        )
        .route(
            "/api/products/edit/:slug",
            get(products::get_by_slug).post(products::update_by_slug),
        )
        .route("/api/users", get(users::list))
        .route(
            "/api/users/edit/:id",
            get(users::get_by_id).delete(users::remove),
        )
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/orders", post(orders::create))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until SIGINT/SIGTERM.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let port = state.config.port;
    let app = router(state);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// A JSON value that may arrive as a number or as a numeric string.
///
/// The product endpoints accept both (`"price": "9.99"` coerces to `9.99`);
/// this enum does the coercion once, at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    /// The numeric value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::String(s) => s.trim().parse().ok(),
        }
    }

    /// The value as a whole non-negative count, if it is one.
    pub fn as_u32(&self) -> Option<u32> {
        let n = self.as_f64()?;
        if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
            Some(n as u32)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumberOrString;

    #[test]
    fn coerces_numeric_strings() {
        assert_eq!(NumberOrString::String("9.99".into()).as_f64(), Some(9.99));
        assert_eq!(NumberOrString::String("15".into()).as_u32(), Some(15));
        assert_eq!(NumberOrString::Number(4.0).as_u32(), Some(4));
    }

    #[test]
    fn rejects_non_numbers_and_fractional_counts() {
        assert_eq!(NumberOrString::String("abc".into()).as_f64(), None);
        assert_eq!(NumberOrString::Number(1.5).as_u32(), None);
        assert_eq!(NumberOrString::Number(-1.0).as_u32(), None);
    }
}

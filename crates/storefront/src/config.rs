//! Environment-driven configuration.
//!
//! Every value has a default so the server comes up in development with no
//! environment at all; missing variables are logged. The auth-secret
//! fallback is insecure by definition and warns loudly.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub auth_secret: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            auth_secret: load_auth_secret(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_auth_secret() -> String {
    var("AUTH_SECRET").unwrap_or_else(|_| {
        warn!("AUTH_SECRET not set, falling back to an insecure development secret");
        "fallback_secret_key_for_development".to_string()
    })
}

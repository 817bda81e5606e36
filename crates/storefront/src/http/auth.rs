//! Authentication endpoints.
//!
//! Login deliberately returns the same 401 message whether the e-mail is
//! unknown or the password is wrong. Registration hashes before the user
//! actor ever sees the credential, and the duplicate-e-mail check is the
//! store index itself; there is no separate existence query to race
//! against.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ApiError, AppState};
use crate::auth;
use crate::model::{User, UserCreate};
use resource_actor::ActorClient;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    fn required(self) -> Result<(String, String), ApiError> {
        let email = self.email.filter(|e| !e.is_empty());
        let password = self.password.filter(|p| !p.is_empty());
        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ApiError::BadRequest(
                "Email and password are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

fn invalid_credentials() -> ApiError {
    ApiError::from(auth::AuthError::InvalidCredentials)
}

/// POST /api/auth/login: verify credentials and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = body.required()?;

    let user = state
        .users
        .find_by_email(email.to_lowercase())
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ApiError::internal("Login failed", e))?;
    if !valid {
        return Err(invalid_credentials());
    }

    let token = auth::issue_token(&user, &state.config.auth_secret)
        .map_err(|e| ApiError::internal("Login failed", e))?;

    info!(email = %user.email, "User logged in");
    Ok(Json(LoginResponse { user, token }))
}

/// POST /api/auth/register: create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (email, password) = body.required()?;

    let password_hash =
        auth::hash_password(&password).map_err(|e| ApiError::internal("Registration failed", e))?;

    let id = state
        .users
        .register_user(UserCreate {
            email: email.to_lowercase(),
            password_hash,
        })
        .await?;

    let user = state
        .users
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Registration failed".to_string()))?;

    info!(email = %user.email, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

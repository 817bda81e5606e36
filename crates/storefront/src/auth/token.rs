//! Signed session tokens.
//!
//! HS256 tokens carrying the user id and e-mail, valid for 30 minutes from
//! issuance. The signing secret comes from configuration.

use super::AuthError;
use crate::model::{User, UserId};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds.
const TOKEN_TTL_SECS: i64 = 30 * 60;

/// JWT claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: UserId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed token for a logged-in user.
pub fn issue_token(user: &User, secret: &str) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        user_id: user.id,
        email: user.email.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenIssue(e.to_string()))
}

/// Decode and verify a token, checking signature and expiry.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::TokenInvalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: UserId(7),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$irrelevant".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_tokens_carry_identity_and_expiry() {
        let user = sample_user();
        let token = issue_token(&user, "secret").unwrap();
        let claims = decode_token(&token, "secret").unwrap();

        assert_eq!(claims.user_id, UserId(7));
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(&sample_user(), "secret").unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }
}

//! # Authentication
//!
//! Credential handling for login and registration: bcrypt hashing at rest
//! ([`password`]) and signed, expiring session tokens ([`token`]).
//!
//! Plaintext passwords exist only inside the two auth handlers; everything
//! past them works with the hash, and no response payload ever carries a
//! credential.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{decode_token, issue_token, Claims};

use thiserror::Error;

/// Errors from credential handling.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown e-mail or wrong password. Deliberately one variant: callers
    /// must not be able to tell which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssue(String),

    #[error("Invalid token: {0}")]
    TokenInvalid(String),
}

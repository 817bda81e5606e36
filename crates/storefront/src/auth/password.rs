//! Password hashing.
//!
//! bcrypt with the library's default cost. Hashes embed their own salt and
//! cost, so verification needs nothing but the stored string.

use super::AuthError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    verify(password, password_hash).map_err(|e| AuthError::Hashing(e.to_string()))
}

//! Entity trait implementation for the User domain type.
//!
//! The e-mail address is the user's unique key and is case-folded to
//! lowercase here, at write time, so lookups by lowercased e-mail always
//! agree with what was stored. The store index makes duplicate
//! registrations a single atomic refusal rather than a query-then-insert
//! race.

use super::error::UserError;
use crate::model::{User, UserCreate, UserId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.email.is_empty() {
            return Err(UserError::ValidationError(
                "Email is required".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            email: params.email.to_lowercase(),
            password_hash: params.password_hash,
            first_name: None,
            last_name: None,
            phone: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

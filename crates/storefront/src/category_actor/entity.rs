//! Entity trait implementation for the Category domain type.
//!
//! Enables [`Category`] to be managed by the generic
//! [`ResourceActor`](resource_actor::ResourceActor). The slug is the
//! category's unique key, so slug uniqueness is enforced by the store
//! itself rather than by a separate existence query.

use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            name: params.name,
            slug: params.slug,
            description: params.description,
            created_at: now,
            updated_at: now,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

//! Entity trait implementation for the Product domain type.
//!
//! Products are the one resource with a cross-actor creation check (the
//! category reference) and a custom action (stock reservation). The slug is
//! the unique key; renames go through the store's index, which refuses a
//! slug already held by another product.

use super::actions::ProductAction;
use super::error::ProductError;
use crate::clients::CategoryClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::ValidationError(
                "Price must be a positive number".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: params.name,
            slug: params.slug,
            description: Some(params.description),
            price: params.price,
            inventory: params.inventory,
            category_id: Some(params.category_id),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }

    /// The category reference must point at an existing category at creation
    /// time.
    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), Self::Error> {
        if let Some(category_id) = self.category_id {
            let category = categories
                .get(category_id)
                .await
                .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
            if category.is_none() {
                return Err(ProductError::InvalidCategory(category_id.to_string()));
            }
        }
        Ok(())
    }

    /// Applies a full update.
    ///
    /// # Fields Updated
    /// - `name`, `price`: mandatory, always written
    /// - `description`: always written (absent clears it)
    /// - `inventory`, `is_active`, `category_id`: written when present
    /// - `new_slug`: replaces the slug when present
    ///
    /// The category reference is not re-validated here; see the update
    /// handler for the contract.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _categories: &CategoryClient,
    ) -> Result<(), Self::Error> {
        if !update.price.is_finite() || update.price < 0.0 {
            return Err(ProductError::ValidationError(
                "Price must be a positive number".to_string(),
            ));
        }
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        if let Some(inventory) = update.inventory {
            self.inventory = inventory;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(new_slug) = update.new_slug {
            self.slug = new_slug;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// # Actions
    /// - `ReserveStock`: decrements inventory if enough is available;
    ///   otherwise fails and leaves the count untouched.
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _categories: &CategoryClient,
    ) -> Result<(), Self::Error> {
        match action {
            ProductAction::ReserveStock(quantity) => {
                if self.inventory >= quantity {
                    self.inventory -= quantity;
                    self.updated_at = Utc::now();
                    Ok(())
                } else {
                    Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.inventory,
                    })
                }
            }
        }
    }
}

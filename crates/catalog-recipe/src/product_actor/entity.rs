//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`actor_framework::ResourceActor`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::error::ProductError;
use crate::faker::DataGenerator;
use crate::model::{
    Category, CategoryId, CreateProductDto, FindProductDto, Product, ProductId, UpdateProductDto,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;

/// Builds the category embedded in a product from its id.
fn synthesize_category(id: CategoryId, generator: &dyn DataGenerator) -> Category {
    Category {
        id,
        name: generator.department(),
        created_at: generator.recent(),
        updated_at: generator.recent(),
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = CreateProductDto;
    type Update = UpdateProductDto;
    type Query = FindProductDto;
    type Context = Arc<dyn DataGenerator>;
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    ///
    /// Timestamps and the category name come from the injected generator.
    fn from_create_params(
        id: ProductId,
        params: CreateProductDto,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            color: params.color,
            description: params.description,
            created_at: ctx.recent(),
            updated_at: ctx.recent(),
            stock: params.stock,
            size: params.size,
            category: synthesize_category(params.category_id, ctx.as_ref()),
            tags: params.tags,
        })
    }

    /// Shallow-merges an update into the product.
    ///
    /// Supplied fields replace the stored ones; everything else, `updated_at`
    /// included, is left as it was. `size: Some(None)` clears the size. A new
    /// `category_id` swaps in a freshly built category; repeating the current id
    /// keeps the existing one.
    async fn on_update(
        &mut self,
        update: UpdateProductDto,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(category_id) = update.category_id {
            if category_id != self.category.id {
                self.category = synthesize_category(category_id, ctx.as_ref());
            }
        }
        Ok(())
    }
}

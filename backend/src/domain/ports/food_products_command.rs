//! Driving port for catalogue writes.

use async_trait::async_trait;

use crate::domain::{Error, FoodProduct, NewFoodProduct};

/// Use-case port for adding products.
///
/// Callers authenticate before reaching this port; implementations enforce
/// name uniqueness and surface collisions as conflicts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodProductsCommand: Send + Sync {
    async fn add_product(&self, product: NewFoodProduct) -> Result<FoodProduct, Error>;
}

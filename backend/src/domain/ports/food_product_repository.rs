//! Port abstraction for food product persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{FoodProduct, NewFoodProduct, PageRequest};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by food product repository adapters.
    pub enum FoodProductRepositoryError {
        /// A pooled connection could not be obtained.
        Connection { message: String } => "food product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "food product repository query failed: {message}",
        /// The unique name constraint rejected an insert.
        DuplicateName { name: String } => "food product name already exists: {name}",
    }
}

/// Storage gateway for the product catalogue.
///
/// Every call checks out its own connection and returns it when the future
/// completes or is dropped.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodProductRepository: Send + Sync {
    /// Products ordered by ascending id within the requested window.
    async fn list(&self, page: PageRequest) -> Result<Vec<FoodProduct>, FoodProductRepositoryError>;

    /// First product, by ascending id, whose name contains `fragment`.
    ///
    /// `%`, `_` and `\` in the fragment match literally.
    async fn find_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError>;

    /// Product whose name equals `name` exactly.
    async fn find_by_exact_name(
        &self,
        name: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError>;

    /// Persist `product` in a transaction and return it with its new id.
    async fn insert(
        &self,
        product: NewFoodProduct,
    ) -> Result<FoodProduct, FoodProductRepositoryError>;
}

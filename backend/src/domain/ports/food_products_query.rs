//! Driving port for catalogue reads.
//!
//! HTTP handlers use this port to list and look up products without
//! depending on the persistence adapter.

use async_trait::async_trait;

use crate::domain::{Error, FoodProduct, PageRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodProductsQuery: Send + Sync {
    /// Products in insertion order within the requested window.
    async fn list_products(&self, page: PageRequest) -> Result<Vec<FoodProduct>, Error>;

    /// First product whose name contains `fragment`.
    ///
    /// Blank fragments are rejected as invalid requests; no match yields a
    /// not-found error.
    async fn find_product(&self, fragment: &str) -> Result<FoodProduct, Error>;
}

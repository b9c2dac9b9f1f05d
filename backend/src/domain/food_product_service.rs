//! Catalogue domain service.
//!
//! Implements the read and write driving ports on top of a
//! [`FoodProductRepository`]. Storage faults are logged here and surfaced to
//! callers as a generic internal error.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    FoodProductRepository, FoodProductRepositoryError, FoodProductsCommand, FoodProductsQuery,
};
use crate::domain::{Error, FoodProduct, NewFoodProduct, PageRequest};

/// Message returned for every storage failure.
pub const PERSISTENCE_FAILURE_MESSAGE: &str = "Internal server error";

/// Catalogue service implementing [`FoodProductsQuery`] and
/// [`FoodProductsCommand`].
#[derive(Clone)]
pub struct FoodProductService<R> {
    repo: Arc<R>,
}

impl<R> FoodProductService<R> {
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> FoodProductService<R>
where
    R: FoodProductRepository,
{
    fn map_repository_error(err: FoodProductRepositoryError) -> Error {
        match err {
            FoodProductRepositoryError::DuplicateName { name } => Self::duplicate_name(&name),
            FoodProductRepositoryError::Connection { message } => {
                error!(%message, "food product repository unavailable");
                Error::internal(PERSISTENCE_FAILURE_MESSAGE)
            }
            FoodProductRepositoryError::Query { message } => {
                error!(%message, "food product repository query failed");
                Error::internal(PERSISTENCE_FAILURE_MESSAGE)
            }
        }
    }

    fn duplicate_name(name: &str) -> Error {
        debug!(name, "rejected duplicate product name");
        Error::conflict("A product with this name already exists").with_details(json!({
            "field": "name",
            "code": "duplicate_name",
        }))
    }
}

fn fragment_error(message: &str, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": "product_name",
        "code": code,
    }))
}

#[async_trait]
impl<R> FoodProductsQuery for FoodProductService<R>
where
    R: FoodProductRepository,
{
    async fn list_products(&self, page: PageRequest) -> Result<Vec<FoodProduct>, Error> {
        self.repo.list(page).await.map_err(Self::map_repository_error)
    }

    async fn find_product(&self, fragment: &str) -> Result<FoodProduct, Error> {
        if fragment.trim().is_empty() {
            return Err(fragment_error("product name must not be blank", "blank_field"));
        }
        if fragment.contains('\0') {
            return Err(fragment_error(
                "product name must not contain NUL characters",
                "invalid_character",
            ));
        }

        self.repo
            .find_by_name_fragment(fragment)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found("Product not found"))
    }
}

#[async_trait]
impl<R> FoodProductsCommand for FoodProductService<R>
where
    R: FoodProductRepository,
{
    async fn add_product(&self, product: NewFoodProduct) -> Result<FoodProduct, Error> {
        let existing = self
            .repo
            .find_by_exact_name(product.name.as_ref())
            .await
            .map_err(Self::map_repository_error)?;
        if existing.is_some() {
            return Err(Self::duplicate_name(product.name.as_ref()));
        }

        // A concurrent insert can still win the race; the unique constraint
        // reports it as DuplicateName.
        self.repo
            .insert(product)
            .await
            .map_err(Self::map_repository_error)
    }
}

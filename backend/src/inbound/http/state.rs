//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain ports,
//! so they can be tested without a database.

use std::sync::Arc;

use crate::domain::ApiKeyGuard;
use crate::domain::ports::{FoodProductsCommand, FoodProductsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn FoodProductsQuery>,
    pub products_command: Arc<dyn FoodProductsCommand>,
    pub api_key: ApiKeyGuard,
}

impl HttpState {
    #[must_use]
    pub fn new(
        products: Arc<dyn FoodProductsQuery>,
        products_command: Arc<dyn FoodProductsCommand>,
        api_key: ApiKeyGuard,
    ) -> Self {
        Self {
            products,
            products_command,
            api_key,
        }
    }
}

//! Test doubles shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and for the `test-support` feature, which the
//! integration tests under `tests/` enable through the dev-dependency on this
//! crate.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{FoodProductRepository, FoodProductRepositoryError};
use crate::domain::{FoodProduct, NewFoodProduct, PageRequest, ProductId};

#[derive(Default)]
struct Store {
    products: Vec<FoodProduct>,
    next_id: i32,
    fail_next: Option<FoodProductRepositoryError>,
}

/// In-memory catalogue with the same ordering, matching and uniqueness rules
/// as the PostgreSQL adapter.
///
/// Ids start at 1 and are never reused, matching `SERIAL`.
#[derive(Default)]
pub struct InMemoryFoodProductRepository {
    store: Mutex<Store>,
}

impl InMemoryFoodProductRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next repository call fail with `error`.
    ///
    /// Failed inserts leave the store untouched, like a rolled-back
    /// transaction.
    pub fn fail_next(&self, error: FoodProductRepositoryError) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next = Some(error);
        }
    }

    /// Snapshot of every stored product in id order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FoodProduct> {
        self.store
            .lock()
            .map(|store| store.products.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, FoodProductRepositoryError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| FoodProductRepositoryError::connection("in-memory store poisoned"))?;
        if let Some(error) = store.fail_next.take() {
            return Err(error);
        }
        Ok(store)
    }
}

fn window(products: &[FoodProduct], page: PageRequest) -> Vec<FoodProduct> {
    let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    products.iter().skip(skip).take(limit).cloned().collect()
}

#[async_trait]
impl FoodProductRepository for InMemoryFoodProductRepository {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<Vec<FoodProduct>, FoodProductRepositoryError> {
        let store = self.lock()?;
        Ok(window(&store.products, page))
    }

    async fn find_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .products
            .iter()
            .find(|product| product.name().as_ref().contains(fragment))
            .cloned())
    }

    async fn find_by_exact_name(
        &self,
        name: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .products
            .iter()
            .find(|product| product.name().as_ref() == name)
            .cloned())
    }

    async fn insert(
        &self,
        product: NewFoodProduct,
    ) -> Result<FoodProduct, FoodProductRepositoryError> {
        let mut store = self.lock()?;
        if store
            .products
            .iter()
            .any(|existing| existing.name() == &product.name)
        {
            return Err(FoodProductRepositoryError::duplicate_name(
                product.name.as_ref(),
            ));
        }

        store.next_id += 1;
        let created = product.with_id(ProductId::new(store.next_id));
        store.products.push(created.clone());
        Ok(created)
    }
}

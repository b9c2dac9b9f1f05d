//! PostgreSQL-backed `FoodProductRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{FoodProductRepository, FoodProductRepositoryError};
use crate::domain::{
    FoodProduct, Ingredients, NewFoodProduct, PageRequest, ProductId, ProductName,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FoodProductRow, NewFoodProductRow};
use super::pool::DbPool;
use super::schema::foodproduct;

/// Diesel-backed implementation of the [`FoodProductRepository`] port.
#[derive(Clone)]
pub struct DieselFoodProductRepository {
    pool: DbPool,
}

impl DieselFoodProductRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` metacharacters so the fragment matches literally.
pub(crate) fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Convert a stored row into the domain type.
///
/// Rows violating the domain bounds indicate out-of-band writes and are
/// reported as query failures.
fn row_to_product(row: FoodProductRow) -> Result<FoodProduct, FoodProductRepositoryError> {
    let name = ProductName::new(row.name).map_err(|err| {
        FoodProductRepositoryError::query(format!("invalid name stored for id {}: {err}", row.id))
    })?;
    let ingredients = Ingredients::new(row.ingredients).map_err(|err| {
        FoodProductRepositoryError::query(format!(
            "invalid ingredients stored for id {}: {err}",
            row.id
        ))
    })?;
    Ok(FoodProduct::new(ProductId::new(row.id), name, ingredients))
}

#[async_trait]
impl FoodProductRepository for DieselFoodProductRepository {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<Vec<FoodProduct>, FoodProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FoodProductRow> = foodproduct::table
            .select(FoodProductRow::as_select())
            .order_by(foodproduct::id.asc())
            .offset(page.skip())
            .limit(page.limit())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn find_by_name_fragment(
        &self,
        fragment: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = format!("%{}%", escape_like(fragment));

        let row: Option<FoodProductRow> = foodproduct::table
            .filter(foodproduct::name.like(pattern).escape('\\'))
            .select(FoodProductRow::as_select())
            .order_by(foodproduct::id.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_product).transpose()
    }

    async fn find_by_exact_name(
        &self,
        name: &str,
    ) -> Result<Option<FoodProduct>, FoodProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FoodProductRow> = foodproduct::table
            .filter(foodproduct::name.eq(name))
            .select(FoodProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_product).transpose()
    }

    async fn insert(
        &self,
        product: NewFoodProduct,
    ) -> Result<FoodProduct, FoodProductRepositoryError> {
        // The connection borrows the row, so it must drop before `product`
        // moves into the result.
        let id = {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let new_row = NewFoodProductRow {
                name: product.name.as_ref(),
                ingredients: product.ingredients.as_ref(),
            };

            // Dropping the future before commit leaves the transaction open on
            // a connection the pool discards, so nothing is committed.
            conn.transaction::<i32, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::insert_into(foodproduct::table)
                        .values(&new_row)
                        .returning(foodproduct::id)
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(err, Some(product.name.as_ref())))?
        };

        Ok(product.with_id(ProductId::new(id)))
    }
}

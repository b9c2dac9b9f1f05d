//! PostgreSQL persistence adapter using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! # Example
//!
//! ```no_run
//! use food_catalogue::outbound::persistence::{DbPool, DieselFoodProductRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), food_catalogue::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/food")).await?;
//! let repo = DieselFoodProductRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_food_product_repository;
mod models;
mod pool;
mod schema;

pub use diesel_food_product_repository::DieselFoodProductRepository;
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};

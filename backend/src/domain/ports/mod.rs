//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod food_product_repository;
mod food_products_command;
mod food_products_query;

pub use food_product_repository::{FoodProductRepository, FoodProductRepositoryError};
pub use food_products_command::FoodProductsCommand;
pub use food_products_query::FoodProductsQuery;

#[cfg(test)]
pub use food_product_repository::MockFoodProductRepository;
#[cfg(test)]
pub use food_products_command::MockFoodProductsCommand;
#[cfg(test)]
pub use food_products_query::MockFoodProductsQuery;

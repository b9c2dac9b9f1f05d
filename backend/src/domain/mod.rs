//! Domain primitives, ports and services.
//!
//! Purpose: define the food product model and the rules applied before a
//! record reaches storage. Types here know nothing about HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - FoodProduct / NewFoodProduct and their field newtypes.
//! - PageRequest — offset/limit listing window.
//! - ApiKey / ApiKeyGuard — shared-secret check for writes.
//! - FoodProductService — implements the driving ports in `ports`.

pub mod api_key;
pub mod error;
pub mod food_product;
pub mod food_product_service;
pub mod page;
pub mod ports;
pub mod trace_id;

pub use self::api_key::{ApiKey, ApiKeyGuard, ApiKeyValidationError, INVALID_API_KEY_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::food_product::{
    FoodProduct, FoodProductValidationError, INGREDIENTS_MAX, Ingredients, NewFoodProduct,
    PRODUCT_NAME_MAX, ProductId, ProductName,
};
pub use self::food_product_service::{FoodProductService, PERSISTENCE_FAILURE_MESSAGE};
pub use self::page::{DEFAULT_LIMIT, PageRequest, PageRequestError};
pub use self::trace_id::TraceId;

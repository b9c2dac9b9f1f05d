//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod products;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::web;

use crate::domain::Error;

/// Register the catalogue endpoints and their extractor configuration.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data. Query strings that cannot be decoded at all are reported as
/// `invalid_request` rather than the framework's plain-text 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid query string: {err}")).into()
    }))
    .service(health::read_root)
    .service(health::ready)
    .service(health::live)
    .service(products::list_products)
    .service(products::add_product)
    .service(products::get_product);
}

//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use food_catalogue::domain::{ApiKeyGuard, FoodProductService};
use food_catalogue::inbound::http::state::HttpState;
use food_catalogue::outbound::persistence::{DbPool, DieselFoodProductRepository};

/// Everything the server factory needs to build each worker's app.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    /// Wire the PostgreSQL adapter behind the catalogue service.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pool: DbPool, api_key: ApiKeyGuard) -> Self {
        let service = Arc::new(FoodProductService::new(Arc::new(
            DieselFoodProductRepository::new(pool),
        )));
        let http_state = HttpState::new(service.clone(), service, api_key);
        Self {
            bind_addr,
            http_state: web::Data::new(http_state),
        }
    }
}

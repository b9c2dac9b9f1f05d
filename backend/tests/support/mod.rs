//! Shared helpers for integration tests.

use std::sync::Arc;

use actix_web::web;
use food_catalogue::domain::{ApiKey, ApiKeyGuard, FoodProductService};
use food_catalogue::inbound::http::health::HealthState;
use food_catalogue::inbound::http::state::HttpState;
use food_catalogue::test_support::InMemoryFoodProductRepository;

/// Key accepted by apps built with [`in_memory_state`].
pub const API_KEY: &str = "integration-secret";

/// Environment variable naming a disposable PostgreSQL database.
pub const TEST_DATABASE_URL_ENV: &str = "TEST_DATABASE_URL";

/// Handler state backed by an in-memory repository the test can inspect.
#[must_use]
pub fn in_memory_state() -> (
    Arc<InMemoryFoodProductRepository>,
    web::Data<HttpState>,
    web::Data<HealthState>,
) {
    let repo = Arc::new(InMemoryFoodProductRepository::new());
    let service = Arc::new(FoodProductService::new(repo.clone()));
    let guard = ApiKeyGuard::new(ApiKey::new(API_KEY).expect("non-blank key"));
    let http_state = web::Data::new(HttpState::new(service.clone(), service, guard));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    (repo, http_state, health_state)
}

/// Database URL for PostgreSQL-backed tests.
///
/// Prints a `SKIP-TEST-DATABASE` marker and returns `None` when
/// `TEST_DATABASE_URL` is unset so suites pass on machines without a server.
#[must_use]
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_ENV} is not set");
            None
        }
    }
}

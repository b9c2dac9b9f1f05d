//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{MockFoodProductsCommand, MockFoodProductsQuery};
use crate::domain::{ApiKey, ApiKeyGuard};

use super::state::HttpState;

/// API key accepted by [`state_with`].
pub const TEST_API_KEY: &str = "test-api-key";

/// Guard configured with [`TEST_API_KEY`].
#[must_use]
pub fn test_guard() -> ApiKeyGuard {
    ApiKeyGuard::new(ApiKey::new(TEST_API_KEY).expect("test key is non-blank"))
}

/// Wrap mocks in handler state.
#[must_use]
pub fn state_with(
    query: MockFoodProductsQuery,
    command: MockFoodProductsCommand,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(query),
        Arc::new(command),
        test_guard(),
    ))
}

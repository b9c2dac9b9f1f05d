//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the catalogue and health endpoints, the schema
//! wrappers from [`crate::inbound::http::schemas`] and the `ApiKey` header
//! scheme guarding `POST /add-product`. The document is served by Swagger UI
//! in debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FoodProductSchema, NewFoodProductSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme referenced by write operations.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Enrich the generated document with the API key header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-API-Key",
                "Shared secret configured through the API_KEY environment variable.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Food catalogue API",
        description = "Read and append food products with their ingredient lists."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::read_root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::add_product,
        crate::inbound::http::products::get_product,
    ),
    components(schemas(
        FoodProductSchema,
        NewFoodProductSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "products", description = "Food product catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

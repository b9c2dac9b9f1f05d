//! Product catalogue handlers.
//!
//! ```text
//! GET  /all-products?skip=0&limit=10
//! POST /add-product            X-API-Key: <secret>  {"name":"...","ingredients":"..."}
//! GET  /product/{product_name}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::domain::FoodProduct;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_api_key;
use crate::inbound::http::schemas::{ErrorSchema, FoodProductSchema, NewFoodProductSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_new_product, parse_page};

/// Query parameters for `GET /all-products`.
///
/// Values are kept as text so malformed numbers produce a structured 422
/// rather than the extractor's default error.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Records to skip, ordered by id. Defaults to 0.
    #[param(value_type = Option<i64>, minimum = 0, example = 0)]
    pub skip: Option<String>,
    /// Maximum records to return. Defaults to 10.
    #[param(value_type = Option<i64>, minimum = 1, example = 10)]
    pub limit: Option<String>,
}

/// List products in insertion order.
#[utoipa::path(
    get,
    path = "/all-products",
    params(ListProductsParams),
    responses(
        (status = 200, description = "Products in id order", body = [FoodProductSchema]),
        (status = 422, description = "Invalid skip or limit", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts",
    security([])
)]
#[get("/all-products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    params: web::Query<ListProductsParams>,
) -> ApiResult<web::Json<Vec<FoodProduct>>> {
    let ListProductsParams { skip, limit } = params.into_inner();
    let page = parse_page(skip.as_deref(), limit.as_deref())?;
    let products = state.products.list_products(page).await?;
    Ok(web::Json(products))
}

/// Add a product.
///
/// The API key is checked before the body is read, so bad credentials are
/// reported even when the payload is malformed.
#[utoipa::path(
    post,
    path = "/add-product",
    request_body = NewFoodProductSchema,
    responses(
        (status = 201, description = "Product created", body = FoodProductSchema),
        (status = 403, description = "Missing or invalid API key", body = ErrorSchema,
            headers(("WWW-Authenticate" = String, description = "Always `ApiKey`"))),
        (status = 409, description = "A product with this name exists", body = ErrorSchema),
        (status = 422, description = "Invalid request body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "addProduct",
    security(("ApiKey" = []))
)]
#[post("/add-product")]
pub async fn add_product(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    require_api_key(&req, &state.api_key)?;
    let product = parse_new_product(&body)?;
    let created = state.products_command.add_product(product).await?;
    info!(id = created.id().get(), "product created");
    Ok(HttpResponse::Created().json(created))
}

/// Fetch the first product whose name contains `product_name`.
#[utoipa::path(
    get,
    path = "/product/{product_name}",
    params(("product_name" = String, Path, description = "Fragment of the product name")),
    responses(
        (status = 200, description = "Matching product", body = FoodProductSchema),
        (status = 404, description = "No product matches", body = ErrorSchema),
        (status = 422, description = "Blank name fragment", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct",
    security([])
)]
#[get("/product/{product_name}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FoodProduct>> {
    let fragment = path.into_inner();
    let product = state.products.find_product(&fragment).await?;
    Ok(web::Json(product))
}

#[cfg(test)]
mod tests;

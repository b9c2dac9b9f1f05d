//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers here mirror their
//! serialised shape and exist only for documentation.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in error bodies.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed or invalid request data (HTTP 422).
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Missing or wrong API key (HTTP 403).
    #[schema(rename = "forbidden")]
    Forbidden,
    /// No matching product (HTTP 404).
    #[schema(rename = "not_found")]
    NotFound,
    /// A product with the same name already exists (HTTP 409).
    #[schema(rename = "conflict")]
    Conflict,
    /// Unexpected storage failure (HTTP 500).
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response payload.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "name must be at most 100 characters")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field": "name", "code": "too_long", "max": 100}`.
    details: Option<serde_json::Value>,
}

/// Stored food product.
#[derive(ToSchema)]
#[schema(as = FoodProduct)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FoodProductSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Apple pie", max_length = 100)]
    name: String,
    #[schema(example = "apples, flour, butter, sugar", max_length = 10000)]
    ingredients: String,
}

/// Body accepted by `POST /add-product`. Supplying `id` is rejected.
#[derive(ToSchema)]
#[schema(as = NewFoodProduct)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct NewFoodProductSchema {
    #[schema(example = "Apple pie", min_length = 1, max_length = 100)]
    name: String,
    #[schema(example = "apples, flour, butter, sugar", min_length = 1, max_length = 10000)]
    ingredients: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "forbidden",
            "not_found",
            "conflict",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case() {
        assert_eq!(ErrorSchema::name(), "Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn product_schemas_have_expected_names() {
        assert_eq!(FoodProductSchema::name(), "FoodProduct");
        assert_eq!(NewFoodProductSchema::name(), "NewFoodProduct");
        assert!(!schema_to_json::<NewFoodProductSchema>().contains("\"id\""));
    }
}

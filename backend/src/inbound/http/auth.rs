//! API-key extraction for write endpoints.

use actix_web::HttpRequest;

use crate::domain::ApiKeyGuard;

use super::ApiResult;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Check the request's `X-API-Key` header against `guard`.
///
/// A header that is not valid visible ASCII counts as a wrong key.
///
/// # Errors
///
/// Returns a `forbidden` error when the key is missing or wrong.
pub fn require_api_key(req: &HttpRequest, guard: &ApiKeyGuard) -> ApiResult<()> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.to_str().unwrap_or_default());
    guard.verify(presented)
}

//! Shared-secret authentication for write operations.
//!
//! The secret is loaded once at startup and compared verbatim against the
//! value presented by callers.

use std::fmt;

use tracing::warn;
use zeroize::Zeroizing;

use super::Error;

/// Message returned whenever a presented key is missing or wrong.
pub const INVALID_API_KEY_MESSAGE: &str = "Could not validate API key";

/// Validation errors for [`ApiKey::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyValidationError {
    Blank,
}

impl fmt::Display for ApiKeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "API key must not be blank"),
        }
    }
}

impl std::error::Error for ApiKeyValidationError {}

/// Configured API secret.
///
/// The buffer is wiped when the value is dropped and `Debug` never prints it.
///
/// # Examples
/// ```
/// use food_catalogue::domain::ApiKey;
///
/// let key = ApiKey::new("s3cret").expect("non-blank key");
/// assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// # Errors
    ///
    /// Returns [`ApiKeyValidationError::Blank`] for an empty or whitespace
    /// secret.
    pub fn new(secret: impl Into<String>) -> Result<Self, ApiKeyValidationError> {
        let secret = Zeroizing::new(secret.into());
        if secret.trim().is_empty() {
            return Err(ApiKeyValidationError::Blank);
        }
        Ok(Self(secret))
    }

    fn matches(&self, presented: &str) -> bool {
        self.0.as_str() == presented
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Gate applied before any write reaches the store.
#[derive(Debug, Clone)]
pub struct ApiKeyGuard {
    expected: ApiKey,
}

impl ApiKeyGuard {
    #[must_use]
    pub fn new(expected: ApiKey) -> Self {
        Self { expected }
    }

    /// Accept the request only when `presented` equals the configured key.
    ///
    /// # Examples
    /// ```
    /// use food_catalogue::domain::{ApiKey, ApiKeyGuard, ErrorCode};
    ///
    /// let guard = ApiKeyGuard::new(ApiKey::new("s3cret").expect("key"));
    /// assert!(guard.verify(Some("s3cret")).is_ok());
    /// let err = guard.verify(None).expect_err("missing key is rejected");
    /// assert_eq!(err.code(), ErrorCode::Forbidden);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `forbidden` [`Error`] when the key is absent or differs.
    pub fn verify(&self, presented: Option<&str>) -> Result<(), Error> {
        match presented {
            Some(value) if self.expected.matches(value) => Ok(()),
            Some(_) => {
                warn!("rejected request with mismatched API key");
                Err(Error::forbidden(INVALID_API_KEY_MESSAGE))
            }
            None => {
                warn!("rejected request without API key");
                Err(Error::forbidden(INVALID_API_KEY_MESSAGE))
            }
        }
    }
}

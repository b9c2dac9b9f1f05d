//! Offset/limit window over the product listing.

use std::fmt;

/// Default number of records returned by a listing.
pub const DEFAULT_LIMIT: i64 = 10;

/// Validation errors for [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequestError {
    NegativeSkip,
    NonPositiveLimit,
}

impl PageRequestError {
    /// Query parameter the error refers to.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::NegativeSkip => "skip",
            Self::NonPositiveLimit => "limit",
        }
    }
}

impl fmt::Display for PageRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSkip => write!(f, "skip must be zero or greater"),
            Self::NonPositiveLimit => write!(f, "limit must be greater than zero"),
        }
    }
}

impl std::error::Error for PageRequestError {}

/// Window of records to return, ordered by ascending id.
///
/// ## Invariants
/// - `skip >= 0`
/// - `limit > 0`
///
/// # Examples
/// ```
/// use food_catalogue::domain::PageRequest;
///
/// let page = PageRequest::new(Some(5), None).expect("valid window");
/// assert_eq!(page.skip(), 5);
/// assert_eq!(page.limit(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: i64,
    limit: i64,
}

impl PageRequest {
    /// Build a window, falling back to defaults for absent values.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] for a negative `skip` or a `limit` below 1.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, PageRequestError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if skip < 0 {
            return Err(PageRequestError::NegativeSkip);
        }
        if limit <= 0 {
            return Err(PageRequestError::NonPositiveLimit);
        }
        Ok(Self { skip, limit })
    }

    #[must_use]
    pub fn skip(&self) -> i64 {
        self.skip
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

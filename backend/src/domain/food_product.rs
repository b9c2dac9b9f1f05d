//! Food product data model.
//!
//! A product is a name plus a free-text ingredient list. Records are
//! append-only: once the store assigns an id nothing changes it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of a product name in characters.
pub const PRODUCT_NAME_MAX: usize = 100;
/// Maximum length of an ingredient list in characters.
pub const INGREDIENTS_MAX: usize = 10_000;

/// Validation errors raised while building product fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodProductValidationError {
    BlankName,
    NameTooLong { max: usize },
    BlankIngredients,
    IngredientsTooLong { max: usize },
    /// PostgreSQL text cannot store U+0000.
    NulCharacter { field: &'static str },
}

impl FoodProductValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankName | Self::NameTooLong { .. } => "name",
            Self::BlankIngredients | Self::IngredientsTooLong { .. } => "ingredients",
            Self::NulCharacter { field } => field,
        }
    }

    /// Upper length bound, when the error is a length violation.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        match self {
            Self::NameTooLong { max } | Self::IngredientsTooLong { max } => Some(*max),
            Self::BlankName | Self::BlankIngredients | Self::NulCharacter { .. } => None,
        }
    }

    /// Whether the value was rejected for being empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::BlankName | Self::BlankIngredients)
    }

    /// Whether the value contained a character the store cannot hold.
    #[must_use]
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, Self::NulCharacter { .. })
    }
}

impl fmt::Display for FoodProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::BlankIngredients => write!(f, "ingredients must not be blank"),
            Self::IngredientsTooLong { max } => {
                write!(f, "ingredients must be at most {max} characters")
            }
            Self::NulCharacter { field } => write!(f, "{field} must not contain NUL characters"),
        }
    }
}

impl std::error::Error for FoodProductValidationError {}

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Wrap an identifier read back from the store.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank product name of at most [`PRODUCT_NAME_MAX`] characters.
///
/// # Examples
/// ```
/// use food_catalogue::domain::ProductName;
///
/// assert!(ProductName::new("Apple pie").is_ok());
/// assert!(ProductName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Validate and wrap a product name.
    ///
    /// # Errors
    ///
    /// Returns [`FoodProductValidationError`] when the name is blank, longer
    /// than [`PRODUCT_NAME_MAX`] characters or contains U+0000.
    pub fn new(name: impl Into<String>) -> Result<Self, FoodProductValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FoodProductValidationError::BlankName);
        }
        if name.contains('\0') {
            return Err(FoodProductValidationError::NulCharacter { field: "name" });
        }
        if name.chars().count() > PRODUCT_NAME_MAX {
            return Err(FoodProductValidationError::NameTooLong {
                max: PRODUCT_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = FoodProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-blank ingredient list of at most [`INGREDIENTS_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ingredients(String);

impl Ingredients {
    /// # Errors
    ///
    /// Returns [`FoodProductValidationError`] when the list is blank, longer
    /// than [`INGREDIENTS_MAX`] characters or contains U+0000.
    pub fn new(ingredients: impl Into<String>) -> Result<Self, FoodProductValidationError> {
        let ingredients = ingredients.into();
        if ingredients.trim().is_empty() {
            return Err(FoodProductValidationError::BlankIngredients);
        }
        if ingredients.contains('\0') {
            return Err(FoodProductValidationError::NulCharacter {
                field: "ingredients",
            });
        }
        if ingredients.chars().count() > INGREDIENTS_MAX {
            return Err(FoodProductValidationError::IngredientsTooLong {
                max: INGREDIENTS_MAX,
            });
        }
        Ok(Self(ingredients))
    }
}

impl AsRef<str> for Ingredients {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Ingredients> for String {
    fn from(value: Ingredients) -> Self {
        value.0
    }
}

impl TryFrom<String> for Ingredients {
    type Error = FoodProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated input for creating a product. Carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodProduct {
    pub name: ProductName,
    pub ingredients: Ingredients,
}

impl NewFoodProduct {
    #[must_use]
    pub fn new(name: ProductName, ingredients: Ingredients) -> Self {
        Self { name, ingredients }
    }

    /// Attach the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> FoodProduct {
        FoodProduct {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}

/// Persisted food product.
///
/// Serialises as `{"id": 1, "name": "...", "ingredients": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodProduct {
    id: ProductId,
    name: ProductName,
    ingredients: Ingredients,
}

impl FoodProduct {
    #[must_use]
    pub fn new(id: ProductId, name: ProductName, ingredients: Ingredients) -> Self {
        Self {
            id,
            name,
            ingredients,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &ProductName {
        &self.name
    }

    #[must_use]
    pub fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }
}

//! Request parsing and validation for the product endpoints.
//!
//! Every failure becomes an `invalid_request` error whose details name the
//! offending field and a stable code.

use serde_json::{Map, Value, json};

use crate::domain::{
    Error, FoodProductValidationError, Ingredients, NewFoodProduct, PageRequest,
    PageRequestError, ProductName,
};

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const INGREDIENTS: FieldName = FieldName::new("ingredients");
pub(crate) const SKIP: FieldName = FieldName::new("skip");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidJson,
    InvalidType,
    MissingField,
    BlankField,
    TooLong,
    InvalidCharacter,
    UnexpectedField,
    InvalidInteger,
    OutOfRange,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::InvalidType => "invalid_type",
            Self::MissingField => "missing_field",
            Self::BlankField => "blank_field",
            Self::TooLong => "too_long",
            Self::InvalidCharacter => "invalid_character",
            Self::UnexpectedField => "unexpected_field",
            Self::InvalidInteger => "invalid_integer",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {field}"),
    )
}

fn product_field_error(err: &FoodProductValidationError) -> Error {
    let code = if err.is_blank() {
        ErrorCode::BlankField
    } else if err.is_invalid_character() {
        ErrorCode::InvalidCharacter
    } else {
        ErrorCode::TooLong
    };
    let mut details = json!({
        "field": err.field(),
        "code": code.as_str(),
    });
    if let (Some(max), Some(object)) = (err.max(), details.as_object_mut()) {
        object.insert("max".to_owned(), json!(max));
    }
    Error::invalid_request(err.to_string()).with_details(details)
}

fn take_string(fields: &mut Map<String, Value>, field: FieldName) -> Result<String, Error> {
    match fields.remove(field.as_str()) {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(field_error(
            field.as_str(),
            ErrorCode::InvalidType,
            format!("{} must be a string", field.as_str()),
        )),
    }
}

/// Parse and validate an add-product request body.
///
/// Only `name` and `ingredients` are accepted; anything else, `id`
/// included, is rejected.
pub(crate) fn parse_new_product(body: &[u8]) -> Result<NewFoodProduct, Error> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request(format!("request body is not valid JSON: {err}"))
            .with_details(json!({ "code": ErrorCode::InvalidJson.as_str() }))
    })?;
    let Value::Object(mut fields) = value else {
        return Err(Error::invalid_request("request body must be a JSON object")
            .with_details(json!({ "code": ErrorCode::InvalidType.as_str() })));
    };

    if let Some(unexpected) = fields
        .keys()
        .find(|key| *key != NAME.as_str() && *key != INGREDIENTS.as_str())
    {
        return Err(field_error(
            unexpected,
            ErrorCode::UnexpectedField,
            format!("unexpected field: {unexpected}"),
        ));
    }

    let name = take_string(&mut fields, NAME)?;
    let ingredients = take_string(&mut fields, INGREDIENTS)?;
    let name = ProductName::new(name).map_err(|err| product_field_error(&err))?;
    let ingredients = Ingredients::new(ingredients).map_err(|err| product_field_error(&err))?;
    Ok(NewFoodProduct::new(name, ingredients))
}

fn parse_integer(raw: Option<&str>, field: FieldName) -> Result<Option<i64>, Error> {
    raw.map(|value| {
        value.trim().parse::<i64>().map_err(|_| {
            let name = field.as_str();
            Error::invalid_request(format!("{name} must be an integer")).with_details(json!({
                "field": name,
                "value": value,
                "code": ErrorCode::InvalidInteger.as_str(),
            }))
        })
    })
    .transpose()
}

/// Build a [`PageRequest`] from raw `skip` and `limit` query values.
pub(crate) fn parse_page(skip: Option<&str>, limit: Option<&str>) -> Result<PageRequest, Error> {
    let skip = parse_integer(skip, SKIP)?;
    let limit = parse_integer(limit, LIMIT)?;
    PageRequest::new(skip, limit).map_err(|err: PageRequestError| {
        field_error(err.field(), ErrorCode::OutOfRange, err.to_string())
    })
}

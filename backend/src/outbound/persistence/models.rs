//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types.

use diesel::prelude::*;

use super::schema::foodproduct;

/// Row read from the `foodproduct` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = foodproduct)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FoodProductRow {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

/// Insertable struct for new catalogue entries. The id comes from `SERIAL`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = foodproduct)]
pub(crate) struct NewFoodProductRow<'a> {
    pub name: &'a str,
    pub ingredients: &'a str,
}

//! Diesel table definitions.
//!
//! Must match `migrations/*_create_foodproduct/up.sql`.

diesel::table! {
    /// Food product catalogue. `name` carries the `foodproduct_name_key`
    /// unique constraint.
    foodproduct (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 10000]
        ingredients -> Varchar,
    }
}

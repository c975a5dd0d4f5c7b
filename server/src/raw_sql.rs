//! Raw SQL fragments that can't be expressed in Diesel's type-safe DSL.
//!
//! # Safety
//!
//! All SQL in this module is static: no user input is interpolated.

/// Move the `dishes.id` sequence past the largest id in the table.
///
/// Needed after importing dishes with explicit ids, otherwise the next insert
/// without an id collides with an imported row.
///
/// # Why raw SQL?
/// Diesel has no DSL for sequence functions.
pub const RESET_DISHES_ID_SEQUENCE: &str =
    "SELECT setval(pg_get_serial_sequence('dishes', 'id'), COALESCE(MAX(id), 1)) FROM dishes";

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use receptai_core::Dish;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DishRow {
    pub id: i32,
    pub title: String,
    pub ingredients: serde_json::Value,
    pub difficulty: String,
}

impl DishRow {
    /// Convert to the matcher's view of a dish.
    ///
    /// Ingredients are stored as a JSONB array of strings; a row holding
    /// anything else is skipped with a warning rather than failing the request.
    pub fn into_dish(self) -> Option<Dish> {
        match serde_json::from_value::<Vec<String>>(self.ingredients) {
            Ok(ingredients) => Some(Dish {
                id: self.id,
                title: self.title,
                ingredients,
                difficulty: self.difficulty,
            }),
            Err(e) => {
                tracing::warn!(dish_id = self.id, error = %e, "Skipping dish with malformed ingredients");
                None
            }
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dishes)]
pub struct NewDish<'a> {
    pub title: &'a str,
    pub ingredients: serde_json::Value,
    pub difficulty: &'a str,
}

/// A catalog dish with a fixed id, inserted or overwritten on import.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::dishes)]
pub struct DishWithId<'a> {
    pub id: i32,
    pub title: &'a str,
    pub ingredients: serde_json::Value,
    pub difficulty: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::cooking_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HistoryEntry {
    pub id: i32,
    #[allow(dead_code)]
    pub user_id: i32,
    pub dish_id: i32,
    pub cooked_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cooking_history)]
pub struct NewHistoryEntry {
    pub user_id: i32,
    pub dish_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dish_row_into_dish() {
        let row = DishRow {
            id: 3,
            title: "Omelette".to_string(),
            ingredients: json!(["egg", "milk"]),
            difficulty: "easy".to_string(),
        };

        let dish = row.into_dish().unwrap();
        assert_eq!(dish.ingredients, vec!["egg", "milk"]);
        assert_eq!(dish.difficulty, "easy");
    }

    #[test]
    fn test_dish_row_with_malformed_ingredients() {
        let row = DishRow {
            id: 4,
            title: "Broken".to_string(),
            ingredients: json!({"egg": 1}),
            difficulty: "easy".to_string(),
        };

        assert!(row.into_dish().is_none());
    }
}

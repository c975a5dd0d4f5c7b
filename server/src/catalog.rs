//! Dish catalog persistence: the full list the matcher runs against, and the
//! administrative import that fills it.

use crate::models::{DishRow, DishWithId, NewDish};
use crate::raw_sql::RESET_DISHES_ID_SEQUENCE;
use crate::schema::dishes;
use diesel::prelude::*;
use receptai_core::catalog::ValidDish;
use receptai_core::Dish;

/// Every dish, in id order. Rows with unreadable ingredients are skipped.
pub fn load_catalog(conn: &mut PgConnection) -> QueryResult<Vec<Dish>> {
    let rows: Vec<DishRow> = dishes::table
        .order(dishes::id.asc())
        .select(DishRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().filter_map(DishRow::into_dish).collect())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub upserted: usize,
}

/// Write validated dishes in a single transaction.
///
/// Entries carrying an id overwrite the dish with that id and go first; the
/// id sequence is then moved past them so the remaining entries, appended
/// with fresh ids, never collide with an imported one.
pub fn import_dishes(conn: &mut PgConnection, entries: &[ValidDish]) -> QueryResult<ImportSummary> {
    let (with_id, without_id): (Vec<&ValidDish>, Vec<&ValidDish>) =
        entries.iter().partition(|entry| entry.id.is_some());

    conn.transaction(|conn| {
        let mut summary = ImportSummary::default();

        for entry in with_id {
            let Some(id) = entry.id else { continue };
            let row = DishWithId {
                id,
                title: &entry.title,
                ingredients: serde_json::Value::from(entry.ingredients.clone()),
                difficulty: entry.difficulty.as_str(),
            };
            diesel::insert_into(dishes::table)
                .values(&row)
                .on_conflict(dishes::id)
                .do_update()
                .set(&row)
                .execute(conn)?;
            summary.upserted += 1;
        }

        if summary.upserted > 0 {
            diesel::sql_query(RESET_DISHES_ID_SEQUENCE).execute(conn)?;
        }

        for entry in without_id {
            diesel::insert_into(dishes::table)
                .values(NewDish {
                    title: &entry.title,
                    ingredients: serde_json::Value::from(entry.ingredients.clone()),
                    difficulty: entry.difficulty.as_str(),
                })
                .execute(conn)?;
            summary.inserted += 1;
        }

        Ok(summary)
    })
}

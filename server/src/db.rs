use anyhow::Context;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database pool")?;

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .context("Failed to get DB connection for migrations")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    if !applied.is_empty() {
        tracing::info!(count = applied.len(), "Applied database migrations");
    }

    Ok(pool)
}

/// Check out a pooled connection, or return `ApiError::Internal` from the
/// enclosing handler.
#[macro_export]
macro_rules! get_conn {
    ($pool:expr) => {
        match $pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(error = %e, "Failed to get database connection");
                return Err($crate::error::ApiError::Internal(
                    "Database connection failed".to_string(),
                ));
            }
        }
    };
}

/// Connection to the database named by `TEST_DATABASE_URL` (or `DATABASE_URL`),
/// migrated and inside a test transaction that is never committed.
///
/// Returns `None` when neither variable is set so database tests are skipped
/// on machines without PostgreSQL.
#[cfg(test)]
pub fn test_connection() -> Option<PgConnection> {
    let url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()?;

    static MIGRATE: std::sync::Once = std::sync::Once::new();
    MIGRATE.call_once(|| {
        let mut conn = PgConnection::establish(&url).expect("Failed to connect to test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations on test database");
    });

    let mut conn = PgConnection::establish(&url).expect("Failed to connect to test database");
    conn.begin_test_transaction()
        .expect("Failed to begin test transaction");

    // Start every test from empty tables; rolled back with the transaction
    diesel::delete(crate::schema::cooking_history::table)
        .execute(&mut conn)
        .expect("Failed to clear cooking_history");
    diesel::delete(crate::schema::dishes::table)
        .execute(&mut conn)
        .expect("Failed to clear dishes");
    diesel::delete(crate::schema::users::table)
        .execute(&mut conn)
        .expect("Failed to clear users");

    Some(conn)
}

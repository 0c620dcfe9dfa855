//! # Database: PostgreSQL pool and schema
//!
//! The pool is built once by the binary from [`settings::Database`] and handed to
//! the router as state; nothing here keeps a process-wide handle. Dropping or
//! [closing](sqlx::Pool::close) the returned pool tears it down.
//!
//! [`migrate`] applies the SQL files embedded from `packages/api/migrations` and
//! must succeed before the first request is served.

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::settings;

/// Open a connection pool, failing if the first connection cannot be made.
pub async fn connect(settings: &settings::Database) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.connections)
        .connect_with(settings.connect_options())
        .await
}

/// Create the `note` table (and anything later migrations add) if needed.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::Executor;

pub mod models;
pub mod mysql_store;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::MySqlPool;

/// A run holds one connection per schema for its whole lifetime.
const MAX_CONNECTIONS: u32 = 1;

/// Drops the zero-date restrictions from the session's SQL mode so the
/// zero-date sentinel can be written to NOT NULL `DATETIME` columns.
const RELAX_ZERO_DATES: &str = "SET SESSION sql_mode = \
     REPLACE(REPLACE(@@SESSION.sql_mode, 'NO_ZERO_IN_DATE', ''), 'NO_ZERO_DATE', '')";

/// Open the connection to the schema characters are read from.
pub async fn create_source_pool(options: MySqlConnectOptions) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Open the connection to the schema characters are written to.
pub async fn create_destination_pool(
    options: MySqlConnectOptions,
) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute(RELAX_ZERO_DATES).await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await
}

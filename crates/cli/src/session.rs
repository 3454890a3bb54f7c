//! Owns the two database connections for the lifetime of one run.

use chartransfer_core::tables::TransferPlan;
use chartransfer_db::mysql_store::{MySqlSink, MySqlSource};

use crate::config::TransferConfig;
use crate::error::TransferError;
use crate::pipeline;
use crate::report::TransferReport;

/// Connect to both schemas, run the transfer, and close both
/// connections whether or not the run succeeded.
pub async fn run_session(
    config: &TransferConfig,
    character: &str,
    plan: &TransferPlan,
) -> Result<TransferReport, TransferError> {
    let source_pool = chartransfer_db::create_source_pool(config.source_options())
        .await
        .map_err(|source| TransferError::Connect {
            database: config.source_database.clone(),
            source,
        })?;
    tracing::info!(database = %config.source_database, "Connected to source database");

    let destination_pool =
        match chartransfer_db::create_destination_pool(config.destination_options()).await {
            Ok(pool) => pool,
            Err(source) => {
                source_pool.close().await;
                return Err(TransferError::Connect {
                    database: config.destination_database.clone(),
                    source,
                });
            }
        };
    tracing::info!(
        database = %config.destination_database,
        "Connected to destination database",
    );

    let source = MySqlSource::new(source_pool);
    let sink = MySqlSink::new(destination_pool);

    let result = pipeline::run(&source, &sink, character, plan).await;

    source.pool().close().await;
    sink.pool().close().await;
    tracing::debug!("Database connections closed");

    result
}

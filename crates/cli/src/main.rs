//! `chartransfer` -- copy one character between game-server databases.
//!
//! Reads the character from the EQEmu (PEQ) schema and writes it into the
//! EQMacEmu (TAKP) schema, replacing any copy already there.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default | Description                  |
//! |---------------------|----------|---------|------------------------------|
//! | `HOST`              | yes      | --      | MySQL host serving both schemas |
//! | `PORT`              | no       | `3306`  | MySQL port                   |
//! | `USERNAME`          | yes      | --      | MySQL user                   |
//! | `PASSWD`            | yes      | --      | MySQL password (may be empty) |
//! | `EQEMU_DATABASE`    | yes      | --      | Source schema                |
//! | `EQMACEMU_DATABASE` | yes      | --      | Destination schema           |
//! | `RUST_LOG`          | no       | see [`logging::DEFAULT_FILTER`] | Log filter |
//!
//! # Exit status
//!
//! `0` on success, `2` when the character does not exist in the source,
//! `1` for any other failure.

use std::process::ExitCode;

use clap::Parser;

use chartransfer_cli::cli::Args;
use chartransfer_cli::config::TransferConfig;
use chartransfer_cli::error::{TransferError, EXIT_FAILURE};
use chartransfer_cli::{logging, session};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    logging::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match transfer(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(character = %args.character, error = %err, "Character transfer failed");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn transfer(args: &Args) -> Result<(), TransferError> {
    let config = TransferConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        source = %config.source_database,
        destination = %config.destination_database,
        "Loaded transfer configuration",
    );

    let report = session::run_session(&config, &args.character, &args.plan()).await?;

    tracing::info!(
        character = %report.character,
        character_id = report.identity.character_id,
        purged = report.purged,
        written = report.rows_written(),
        tables = report.tables.len(),
        "Character transfer complete",
    );
    Ok(())
}

//! The seams transfer units read and write through.
//!
//! A [`RowSource`] hands out source-shaped rows for one identity key and a
//! [`RowSink`] accepts destination-shaped rows. Each row type carries its
//! own table, column list and mapping, so a transfer unit is generic over
//! the row type alone.

use std::future::Future;

use chartransfer_core::error::CoreError;
use chartransfer_core::identity::Identity;
use chartransfer_core::tables::{CleanupTarget, TransferTable};
use chartransfer_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::{FromRow, MySql};

/// A parameterised MySQL statement awaiting its bind values.
pub type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, MySqlArguments>;

/// A record read from a source table.
pub trait SourceRow:
    for<'r> FromRow<'r, MySqlRow> + DeserializeOwned + Send + Unpin + 'static
{
    const TABLE: TransferTable;
    /// Source columns decoded into the record. Nothing else is selected.
    const COLUMNS: &'static [&'static str];

    type Destination: DestinationRow;

    /// Apply the table's column mapping.
    ///
    /// `Ok(None)` means the row is intentionally not transferred.
    fn into_destination(self) -> Result<Option<Self::Destination>, CoreError>;
}

/// A record written to a destination table.
pub trait DestinationRow: Serialize + Send + Sync + 'static {
    const TABLE: TransferTable;
    /// Destination columns in insert order; must match [`bind_values`].
    ///
    /// [`bind_values`]: DestinationRow::bind_values
    const COLUMNS: &'static [&'static str];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

/// Reads from the source schema.
pub trait RowSource: Send + Sync {
    /// Identities of every character with exactly this name.
    fn find_identities(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Identity>, sqlx::Error>> + Send;

    /// All rows of `R`'s table whose key column equals `key`.
    fn fetch_rows<R: SourceRow>(
        &self,
        key: DbId,
    ) -> impl Future<Output = Result<Vec<R>, sqlx::Error>> + Send;
}

/// Writes to the destination schema.
pub trait RowSink: Send + Sync {
    /// Delete every row of `target` owned by `key`. Returns rows removed.
    fn delete_rows(
        &self,
        target: &CleanupTarget,
        key: DbId,
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;

    /// Insert `rows` one statement at a time inside a single transaction.
    /// Returns rows written.
    fn insert_rows<R: DestinationRow>(
        &self,
        rows: &[R],
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;
}

/// Wrap each column in backticks so reserved words (`class`, `int`) parse.
pub fn quoted_columns(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT` for all of one identity's rows in `R`'s source table.
pub fn select_statement<R: SourceRow>() -> String {
    format!(
        "SELECT {} FROM `{}` WHERE `{}` = ?",
        quoted_columns(R::COLUMNS),
        R::TABLE.source_table(),
        R::TABLE.source_key_column(),
    )
}

/// Single-row `INSERT` into `R`'s destination table.
pub fn insert_statement<R: DestinationRow>() -> String {
    let placeholders = vec!["?"; R::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO `{}` ({}) VALUES ({placeholders})",
        R::TABLE.destination_table(),
        quoted_columns(R::COLUMNS),
    )
}

/// `DELETE` of one identity's rows from a cleanup target.
pub fn delete_statement(target: &CleanupTarget) -> String {
    format!(
        "DELETE FROM `{}` WHERE `{}` = ?",
        target.table, target.key_column
    )
}

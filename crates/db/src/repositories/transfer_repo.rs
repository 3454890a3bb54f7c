//! Generic reads, inserts and purges for the transferred tables.

use chartransfer_core::tables::CleanupTarget;
use chartransfer_core::types::DbId;
use sqlx::MySqlPool;

use crate::store::{
    delete_statement, insert_statement, select_statement, DestinationRow, SourceRow,
};

pub struct TransferRepo;

impl TransferRepo {
    /// All source rows of `R`'s table owned by `key`.
    pub async fn fetch_rows<R: SourceRow>(
        pool: &MySqlPool,
        key: DbId,
    ) -> Result<Vec<R>, sqlx::Error> {
        let query = select_statement::<R>();
        sqlx::query_as::<_, R>(&query)
            .bind(key)
            .fetch_all(pool)
            .await
    }

    /// Insert each row with its own statement, committing them together.
    ///
    /// A failing insert drops the transaction, which rolls back every row
    /// inserted before it.
    pub async fn insert_rows<R: DestinationRow>(
        pool: &MySqlPool,
        rows: &[R],
    ) -> Result<u64, sqlx::Error> {
        let query = insert_statement::<R>();
        let mut tx = pool.begin().await?;
        let mut written = 0;

        for row in rows {
            let result = row.bind_values(sqlx::query(&query)).execute(&mut *tx).await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Delete one identity's rows from a destination table. Returns `rows_affected`.
    pub async fn delete_rows(
        pool: &MySqlPool,
        target: &CleanupTarget,
        key: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(&delete_statement(target))
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

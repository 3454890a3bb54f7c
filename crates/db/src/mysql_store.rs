//! [`RowSource`] and [`RowSink`] backed by live MySQL pools.

use chartransfer_core::identity::Identity;
use chartransfer_core::tables::CleanupTarget;
use chartransfer_core::types::DbId;

use crate::repositories::{CharacterRepo, TransferRepo};
use crate::store::{DestinationRow, RowSink, RowSource, SourceRow};
use crate::DbPool;

/// Reads characters out of the source schema.
#[derive(Debug, Clone)]
pub struct MySqlSource {
    pool: DbPool,
}

impl MySqlSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl RowSource for MySqlSource {
    async fn find_identities(&self, name: &str) -> Result<Vec<Identity>, sqlx::Error> {
        CharacterRepo::find_identities(&self.pool, name).await
    }

    async fn fetch_rows<R: SourceRow>(&self, key: DbId) -> Result<Vec<R>, sqlx::Error> {
        TransferRepo::fetch_rows(&self.pool, key).await
    }
}

/// Writes characters into the destination schema.
#[derive(Debug, Clone)]
pub struct MySqlSink {
    pool: DbPool,
}

impl MySqlSink {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl RowSink for MySqlSink {
    async fn delete_rows(&self, target: &CleanupTarget, key: DbId) -> Result<u64, sqlx::Error> {
        TransferRepo::delete_rows(&self.pool, target, key).await
    }

    async fn insert_rows<R: DestinationRow>(&self, rows: &[R]) -> Result<u64, sqlx::Error> {
        TransferRepo::insert_rows(&self.pool, rows).await
    }
}

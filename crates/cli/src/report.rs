//! Per-run summary of what was purged and copied.

use chartransfer_core::identity::Identity;
use chartransfer_core::tables::TransferTable;

/// Row counts for one transfer unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub table: TransferTable,
    /// Rows read from the source table.
    pub read: usize,
    /// Rows inserted into the destination table.
    pub written: u64,
    /// Rows the column mapping chose not to transfer.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub character: String,
    pub identity: Identity,
    /// Destination rows removed before copying.
    pub purged: u64,
    pub tables: Vec<TableOutcome>,
}

impl TransferReport {
    pub fn rows_written(&self) -> u64 {
        self.tables.iter().map(|t| t.written).sum()
    }

    pub fn outcome(&self, table: TransferTable) -> Option<&TableOutcome> {
        self.tables.iter().find(|t| t.table == table)
    }
}

//! `character_currency` rows.
//!
//! The destination only knows coin. The source's crystal columns are
//! never selected.

use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Coin on hand, in the bank, and on the cursor.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CharacterCurrency {
    pub id: u32,
    pub platinum: u32,
    pub gold: u32,
    pub silver: u32,
    pub copper: u32,
    pub platinum_bank: u32,
    pub gold_bank: u32,
    pub silver_bank: u32,
    pub copper_bank: u32,
    pub platinum_cursor: u32,
    pub gold_cursor: u32,
    pub silver_cursor: u32,
    pub copper_cursor: u32,
}

straight_copy!(
    CharacterCurrency,
    TransferTable::CharacterCurrency,
    [
        id,
        platinum,
        gold,
        silver,
        copper,
        platinum_bank,
        gold_bank,
        silver_bank,
        copper_bank,
        platinum_cursor,
        gold_cursor,
        silver_cursor,
        copper_cursor,
    ]
);

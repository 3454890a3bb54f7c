//! `account_ip` rows. Identical in both schemas.

use chartransfer_core::tables::TransferTable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One login address recorded for an account.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AccountIp {
    pub accid: i32,
    pub ip: String,
    pub count: i32,
    pub lastused: NaiveDateTime,
}

straight_copy!(AccountIp, TransferTable::AccountIp, [accid, ip, count, lastused]);

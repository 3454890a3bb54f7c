//! `account` rows.
//!
//! The source carries several columns with no destination counterpart
//! (`ls_id`, `invulnerable`, the client CRCs); they are never selected.

use chartransfer_core::error::CoreError;
use chartransfer_core::mapping::{datetime_or_sentinel, DESTINATION_EXPANSION};
use chartransfer_core::tables::TransferTable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{DestinationRow, MySqlQuery, SourceRow};

/// An `account` row as stored in the source schema.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SourceAccount {
    pub id: i32,
    pub name: String,
    pub charname: String,
    pub sharedplat: u32,
    pub password: String,
    pub status: i32,
    pub lsaccount_id: Option<u32>,
    pub gmspeed: u8,
    pub flymode: u8,
    pub ignore_tells: u8,
    pub revoked: u8,
    pub karma: u32,
    pub minilogin_ip: String,
    pub hideme: i8,
    pub rulesflag: u8,
    pub suspendeduntil: Option<NaiveDateTime>,
    pub time_creation: u32,
    pub ban_reason: Option<String>,
    pub suspend_reason: Option<String>,
}

/// An `account` row shaped for the destination schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub charname: String,
    pub sharedplat: u32,
    pub password: String,
    pub status: i32,
    pub lsaccount_id: Option<u32>,
    pub gmspeed: u8,
    pub revoked: u8,
    pub karma: u32,
    pub minilogin_ip: String,
    pub hideme: i8,
    pub rulesflag: u8,
    /// NOT NULL in the destination; see [`datetime_or_sentinel`].
    pub suspendeduntil: String,
    pub time_creation: u32,
    pub expansion: u8,
    pub ban_reason: Option<String>,
    pub suspend_reason: Option<String>,
    pub flymode: u8,
    pub ignore_tells: u8,
}

impl From<SourceAccount> for Account {
    fn from(src: SourceAccount) -> Self {
        Self {
            id: src.id,
            name: src.name,
            charname: src.charname,
            sharedplat: src.sharedplat,
            password: src.password,
            status: src.status,
            lsaccount_id: src.lsaccount_id,
            gmspeed: src.gmspeed,
            revoked: src.revoked,
            karma: src.karma,
            minilogin_ip: src.minilogin_ip,
            hideme: src.hideme,
            rulesflag: src.rulesflag,
            suspendeduntil: datetime_or_sentinel(src.suspendeduntil),
            time_creation: src.time_creation,
            expansion: DESTINATION_EXPANSION,
            ban_reason: src.ban_reason,
            suspend_reason: src.suspend_reason,
            flymode: src.flymode,
            ignore_tells: src.ignore_tells,
        }
    }
}

impl SourceRow for SourceAccount {
    const TABLE: TransferTable = TransferTable::Account;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "charname",
        "sharedplat",
        "password",
        "status",
        "lsaccount_id",
        "gmspeed",
        "flymode",
        "ignore_tells",
        "revoked",
        "karma",
        "minilogin_ip",
        "hideme",
        "rulesflag",
        "suspendeduntil",
        "time_creation",
        "ban_reason",
        "suspend_reason",
    ];

    type Destination = Account;

    fn into_destination(self) -> Result<Option<Account>, CoreError> {
        Ok(Some(self.into()))
    }
}

impl DestinationRow for Account {
    const TABLE: TransferTable = TransferTable::Account;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "charname",
        "sharedplat",
        "password",
        "status",
        "lsaccount_id",
        "gmspeed",
        "revoked",
        "karma",
        "minilogin_ip",
        "hideme",
        "rulesflag",
        "suspendeduntil",
        "time_creation",
        "expansion",
        "ban_reason",
        "suspend_reason",
        "flymode",
        "ignore_tells",
    ];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.charname)
            .bind(self.sharedplat)
            .bind(&self.password)
            .bind(self.status)
            .bind(self.lsaccount_id)
            .bind(self.gmspeed)
            .bind(self.revoked)
            .bind(self.karma)
            .bind(&self.minilogin_ip)
            .bind(self.hideme)
            .bind(self.rulesflag)
            .bind(&self.suspendeduntil)
            .bind(self.time_creation)
            .bind(self.expansion)
            .bind(&self.ban_reason)
            .bind(&self.suspend_reason)
            .bind(self.flymode)
            .bind(self.ignore_tells)
    }
}

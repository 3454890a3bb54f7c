//! Inventory rows (`inventory` → `character_inventory`).
//!
//! Only the item and its charges are portable; augments, colors and
//! instance data are not selected. Slot ids go through
//! [`translate_slot_id`], which rejects slots the destination lacks.

use chartransfer_core::error::CoreError;
use chartransfer_core::inventory::translate_slot_id;
use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{DestinationRow, MySqlQuery, SourceRow};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SourceInventoryItem {
    pub charid: u32,
    pub slotid: u32,
    pub itemid: Option<u32>,
    pub charges: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterInventoryItem {
    pub id: u32,
    pub slotid: u32,
    pub itemid: Option<u32>,
    pub charges: Option<u16>,
}

impl SourceRow for SourceInventoryItem {
    const TABLE: TransferTable = TransferTable::Inventory;
    const COLUMNS: &'static [&'static str] = &["charid", "slotid", "itemid", "charges"];

    type Destination = CharacterInventoryItem;

    fn into_destination(self) -> Result<Option<CharacterInventoryItem>, CoreError> {
        let slotid = translate_slot_id(self.charid.into(), self.slotid)?;
        Ok(Some(CharacterInventoryItem {
            id: self.charid,
            slotid,
            itemid: self.itemid,
            charges: self.charges,
        }))
    }
}

impl DestinationRow for CharacterInventoryItem {
    const TABLE: TransferTable = TransferTable::Inventory;
    const COLUMNS: &'static [&'static str] = &["id", "slotid", "itemid", "charges"];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.id)
            .bind(self.slotid)
            .bind(self.itemid)
            .bind(self.charges)
    }
}

//! `character_bind` rows.
//!
//! The source stores up to five bind points per character in `slot`; the
//! destination only has the home bind and the primary bind, flagged by
//! `is_home`. Other slots are skipped.

use chartransfer_core::error::CoreError;
use chartransfer_core::mapping::is_portable_bind_slot;
use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{DestinationRow, MySqlQuery, SourceRow};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SourceCharacterBind {
    pub id: u32,
    pub slot: i32,
    pub zone_id: u16,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterBind {
    pub id: u32,
    pub is_home: u8,
    pub zone_id: u16,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
}

impl SourceRow for SourceCharacterBind {
    const TABLE: TransferTable = TransferTable::CharacterBind;
    const COLUMNS: &'static [&'static str] =
        &["id", "slot", "zone_id", "x", "y", "z", "heading"];

    type Destination = CharacterBind;

    fn into_destination(self) -> Result<Option<CharacterBind>, CoreError> {
        if !is_portable_bind_slot(self.slot) {
            return Ok(None);
        }
        Ok(Some(CharacterBind {
            id: self.id,
            is_home: u8::from(self.slot == 1),
            zone_id: self.zone_id,
            x: self.x,
            y: self.y,
            z: self.z,
            heading: self.heading,
        }))
    }
}

impl DestinationRow for CharacterBind {
    const TABLE: TransferTable = TransferTable::CharacterBind;
    const COLUMNS: &'static [&'static str] =
        &["id", "is_home", "zone_id", "x", "y", "z", "heading"];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.id)
            .bind(self.is_home)
            .bind(self.zone_id)
            .bind(self.x)
            .bind(self.y)
            .bind(self.z)
            .bind(self.heading)
    }
}

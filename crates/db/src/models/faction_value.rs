//! Faction standings. The source table is `faction_values` keyed by
//! `char_id`; the destination is `character_faction_values` keyed by `id`.

use chartransfer_core::error::CoreError;
use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{DestinationRow, MySqlQuery, SourceRow};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SourceFactionValue {
    pub char_id: i32,
    pub faction_id: i32,
    pub current_value: i16,
    pub temp: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterFactionValue {
    pub id: i32,
    pub faction_id: i32,
    pub current_value: i16,
    pub temp: i8,
}

impl SourceRow for SourceFactionValue {
    const TABLE: TransferTable = TransferTable::FactionValues;
    const COLUMNS: &'static [&'static str] = &["char_id", "faction_id", "current_value", "temp"];

    type Destination = CharacterFactionValue;

    fn into_destination(self) -> Result<Option<CharacterFactionValue>, CoreError> {
        Ok(Some(CharacterFactionValue {
            id: self.char_id,
            faction_id: self.faction_id,
            current_value: self.current_value,
            temp: self.temp,
        }))
    }
}

impl DestinationRow for CharacterFactionValue {
    const TABLE: TransferTable = TransferTable::FactionValues;
    const COLUMNS: &'static [&'static str] = &["id", "faction_id", "current_value", "temp"];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.id)
            .bind(self.faction_id)
            .bind(self.current_value)
            .bind(self.temp)
    }
}

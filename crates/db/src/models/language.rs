use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A language skill row from `character_languages`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CharacterLanguage {
    pub id: u32,
    pub lang_id: u16,
    pub value: u16,
}

straight_copy!(CharacterLanguage, TransferTable::Languages, [id, lang_id, value]);

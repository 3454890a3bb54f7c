use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `character_skills` row.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub id: u32,
    pub skill_id: u16,
    pub value: u16,
}

straight_copy!(CharacterSkill, TransferTable::Skills, [id, skill_id, value]);

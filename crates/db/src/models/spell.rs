//! Spellbook and memorized spell rows. Both tables share a layout.

use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A spell scribed in the spellbook (`character_spells`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CharacterSpell {
    pub id: u32,
    pub slot_id: u16,
    pub spell_id: u16,
}

/// A spell loaded into a gem (`character_memmed_spells`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CharacterMemorizedSpell {
    pub id: u32,
    pub slot_id: u16,
    pub spell_id: u16,
}

straight_copy!(CharacterSpell, TransferTable::Spells, [id, slot_id, spell_id]);
straight_copy!(
    CharacterMemorizedSpell,
    TransferTable::MemorizedSpells,
    [id, slot_id, spell_id]
);

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(
        "Character '{name}' does not exist in the source database. \
         Check the EQEMU_DATABASE configuration variable."
    )]
    CharacterNotFound { name: String },

    #[error("Character name '{name}' matched {matches} rows in the source database")]
    AmbiguousCharacter { name: String, matches: usize },

    #[error("Inventory slot {slot_id} of character {character_id} has no destination slot")]
    UnmappedInventorySlot { character_id: DbId, slot_id: u32 },
}

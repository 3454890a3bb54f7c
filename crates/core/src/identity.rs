//! The identity triple every per-character operation is keyed on.

use crate::error::CoreError;
use crate::types::DbId;

/// Keys resolved from the source database for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub character_id: DbId,
    pub account_id: DbId,
    /// `account.lsaccount_id` is nullable in the source schema.
    pub ls_account_id: Option<DbId>,
}

impl Identity {
    /// Pick the identity out of the rows a name lookup returned.
    ///
    /// Exactly one row is required. Zero rows means the character does
    /// not exist; more than one is reported rather than guessed at.
    pub fn from_matches(name: &str, mut matches: Vec<Identity>) -> Result<Self, CoreError> {
        match matches.len() {
            0 => Err(CoreError::CharacterNotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            n => Err(CoreError::AmbiguousCharacter {
                name: name.to_string(),
                matches: n,
            }),
        }
    }
}

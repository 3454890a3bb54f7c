//! Catalog of the tables a character transfer touches, the order it
//! touches them in, and the tables it deliberately never copies.

use crate::identity::Identity;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Key scope
// ---------------------------------------------------------------------------

/// Which half of the identity a table is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    Account,
    Character,
}

impl KeyScope {
    /// The key value this scope selects from a resolved identity.
    pub fn key(&self, identity: &Identity) -> DbId {
        match self {
            Self::Account => identity.account_id,
            Self::Character => identity.character_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Transfer tables
// ---------------------------------------------------------------------------

/// One table copied from the source schema into the destination schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferTable {
    Account,
    AccountIp,
    CharacterBind,
    CharacterCurrency,
    CharacterData,
    FactionValues,
    Inventory,
    Languages,
    Spells,
    MemorizedSpells,
    Skills,
}

impl TransferTable {
    /// Every table, in the order a run transfers them.
    pub const ALL: [TransferTable; 11] = [
        Self::Account,
        Self::AccountIp,
        Self::CharacterBind,
        Self::CharacterCurrency,
        Self::CharacterData,
        Self::FactionValues,
        Self::Inventory,
        Self::Languages,
        Self::Spells,
        Self::MemorizedSpells,
        Self::Skills,
    ];

    /// Table name in the source schema.
    pub fn source_table(&self) -> &'static str {
        match self {
            Self::FactionValues => "faction_values",
            Self::Inventory => "inventory",
            other => other.destination_table(),
        }
    }

    /// Table name in the destination schema.
    pub fn destination_table(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::AccountIp => "account_ip",
            Self::CharacterBind => "character_bind",
            Self::CharacterCurrency => "character_currency",
            Self::CharacterData => "character_data",
            Self::FactionValues => "character_faction_values",
            Self::Inventory => "character_inventory",
            Self::Languages => "character_languages",
            Self::Spells => "character_spells",
            Self::MemorizedSpells => "character_memmed_spells",
            Self::Skills => "character_skills",
        }
    }

    pub fn scope(&self) -> KeyScope {
        match self {
            Self::Account | Self::AccountIp => KeyScope::Account,
            _ => KeyScope::Character,
        }
    }

    /// Column holding the identity key in the source table.
    pub fn source_key_column(&self) -> &'static str {
        match self {
            Self::AccountIp => "accid",
            Self::FactionValues => "char_id",
            Self::Inventory => "charid",
            _ => "id",
        }
    }

    /// Column holding the identity key in the destination table.
    pub fn destination_key_column(&self) -> &'static str {
        match self {
            Self::AccountIp => "accid",
            _ => "id",
        }
    }

    /// Inventory slot ids differ between the schemas, so inventory is
    /// only copied when the operator asks for it.
    pub fn enabled_by_default(&self) -> bool {
        !matches!(self, Self::Inventory)
    }
}

impl std::fmt::Display for TransferTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.destination_table())
    }
}

// ---------------------------------------------------------------------------
// Transfer plan
// ---------------------------------------------------------------------------

/// Ordered list of tables a single run will copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    tables: Vec<TransferTable>,
}

impl Default for TransferPlan {
    fn default() -> Self {
        Self {
            tables: TransferTable::ALL
                .into_iter()
                .filter(TransferTable::enabled_by_default)
                .collect(),
        }
    }
}

impl TransferPlan {
    /// The default plan plus the inventory table, kept in run order.
    pub fn with_inventory(self) -> Self {
        let mut tables = self.tables;
        tables.push(TransferTable::Inventory);
        Self {
            tables: TransferTable::ALL
                .into_iter()
                .filter(|t| tables.contains(t))
                .collect(),
        }
    }

    pub fn tables(&self) -> &[TransferTable] {
        &self.tables
    }

    pub fn includes(&self, table: TransferTable) -> bool {
        self.tables.contains(&table)
    }
}

// ---------------------------------------------------------------------------
// Cleanup targets
// ---------------------------------------------------------------------------

/// A destination table the cleaner empties for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupTarget {
    pub table: &'static str,
    pub key_column: &'static str,
    pub scope: KeyScope,
}

/// Every destination table a transfer can write, including inventory.
///
/// Purging does not depend on the plan so that rows left behind by an
/// earlier inventory-enabled run are removed as well.
pub fn cleanup_targets() -> Vec<CleanupTarget> {
    TransferTable::ALL
        .iter()
        .map(|t| CleanupTarget {
            table: t.destination_table(),
            key_column: t.destination_key_column(),
            scope: t.scope(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Excluded tables
// ---------------------------------------------------------------------------

/// Source tables that are never transferred. They hold per-server,
/// ephemeral, or live-world state (corpses, pets, guilds, mail, globals).
pub const EXCLUDED_TABLES: &[&str] = &[
    "account_flags",
    "account_rewards",
    "character_alternate_abilities",
    "character_consent",
    "character_bandolier",
    "character_buffs",
    "character_corpse_items",
    "character_corpse_items_backup",
    "character_corpses",
    "character_corpses_backup",
    "character_inspect_messages",
    "character_keyring",
    "character_lookup",
    "character_material",
    "character_pet_buffs",
    "character_pet_info",
    "character_pet_inventory",
    "character_soulmarks",
    "character_timers",
    "character_zone_flags",
    "discovered_items",
    "friends",
    "guilds",
    "guild_ranks",
    "guild_members",
    "mail",
    "petitions",
    "player_titlesets",
    "quest_globals",
    "spell_globals",
    "client_version",
    "commands_log",
    "titles",
    "trader",
];

pub fn is_excluded(table: &str) -> bool {
    EXCLUDED_TABLES.contains(&table)
}

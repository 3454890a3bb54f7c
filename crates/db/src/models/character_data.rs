//! `character_data` rows, the bulk of a character.
//!
//! The source schema has grown many progression and event columns
//! (leadership, LDoN, tribute, PvP counters, drakkin features, ability
//! timers, instance ids) that the destination cannot represent; they are
//! never selected. `class` and `int` are reserved words and are renamed on
//! the Rust side.

use chartransfer_core::error::CoreError;
use chartransfer_core::mapping::DESTINATION_FORUM_ID;
use chartransfer_core::tables::TransferTable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{DestinationRow, MySqlQuery, SourceRow};

/// A `character_data` row as stored in the source schema.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SourceCharacterData {
    pub id: u32,
    pub account_id: i32,
    pub name: String,
    pub last_name: String,
    pub title: String,
    pub suffix: String,
    pub zone_id: u32,
    pub y: f32,
    pub x: f32,
    pub z: f32,
    pub heading: f32,
    pub gender: u8,
    pub race: u16,
    #[sqlx(rename = "class")]
    #[serde(rename = "class")]
    pub class_id: u8,
    pub level: u32,
    pub deity: u32,
    pub birthday: u32,
    pub last_login: u32,
    pub time_played: u32,
    pub level2: u8,
    pub anon: u8,
    pub gm: u8,
    pub face: u32,
    pub hair_color: u8,
    pub hair_style: u8,
    pub beard: u8,
    pub beard_color: u8,
    pub eye_color_1: u8,
    pub eye_color_2: u8,
    pub exp: u32,
    pub aa_points_spent: u32,
    pub aa_exp: u32,
    pub aa_points: u32,
    pub points: u32,
    pub cur_hp: u32,
    pub mana: u32,
    pub endurance: u32,
    pub intoxication: u32,
    pub str: u32,
    pub sta: u32,
    pub cha: u32,
    pub dex: u32,
    #[sqlx(rename = "int")]
    #[serde(rename = "int")]
    pub intelligence: u32,
    pub agi: u32,
    pub wis: u32,
    pub zone_change_count: u32,
    pub hunger_level: u32,
    pub thirst_level: u32,
    pub show_helm: u8,
    pub pvp_status: u8,
    pub air_remaining: u32,
    pub autosplit_enabled: u8,
    pub mailkey: String,
    pub firstlogon: i8,
    pub e_aa_effects: u32,
    pub e_percent_to_aa: u32,
    pub e_expended_aa_spent: u32,
}

/// A `character_data` row shaped for the destination schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterData {
    pub id: u32,
    pub account_id: i32,
    pub forum_id: i32,
    pub name: String,
    pub last_name: String,
    pub title: String,
    pub suffix: String,
    pub zone_id: u32,
    pub y: f32,
    pub x: f32,
    pub z: f32,
    pub heading: f32,
    pub gender: u8,
    pub race: u16,
    #[serde(rename = "class")]
    pub class_id: u8,
    pub level: u32,
    pub deity: u32,
    pub birthday: u32,
    pub last_login: u32,
    pub time_played: u32,
    pub level2: u8,
    pub anon: u8,
    pub gm: u8,
    pub face: u32,
    pub hair_color: u8,
    pub hair_style: u8,
    pub beard: u8,
    pub beard_color: u8,
    pub eye_color_1: u8,
    pub eye_color_2: u8,
    pub exp: u32,
    pub aa_points_spent: u32,
    pub aa_exp: u32,
    pub aa_points: u32,
    pub points: u32,
    pub cur_hp: u32,
    pub mana: u32,
    pub endurance: u32,
    pub intoxication: u32,
    pub str: u32,
    pub sta: u32,
    pub cha: u32,
    pub dex: u32,
    #[serde(rename = "int")]
    pub intelligence: u32,
    pub agi: u32,
    pub wis: u32,
    pub zone_change_count: u32,
    pub hunger_level: u32,
    pub thirst_level: u32,
    pub pvp_status: u8,
    pub air_remaining: u32,
    pub autosplit_enabled: u8,
    pub mailkey: String,
    pub firstlogon: i8,
    pub e_aa_effects: u32,
    pub e_percent_to_aa: u32,
    pub e_expended_aa_spent: u32,
    pub showhelm: u8,
}

impl From<SourceCharacterData> for CharacterData {
    fn from(src: SourceCharacterData) -> Self {
        Self {
            id: src.id,
            account_id: src.account_id,
            forum_id: DESTINATION_FORUM_ID,
            name: src.name,
            last_name: src.last_name,
            title: src.title,
            suffix: src.suffix,
            zone_id: src.zone_id,
            y: src.y,
            x: src.x,
            z: src.z,
            heading: src.heading,
            gender: src.gender,
            race: src.race,
            class_id: src.class_id,
            level: src.level,
            deity: src.deity,
            birthday: src.birthday,
            last_login: src.last_login,
            time_played: src.time_played,
            level2: src.level2,
            anon: src.anon,
            gm: src.gm,
            face: src.face,
            hair_color: src.hair_color,
            hair_style: src.hair_style,
            beard: src.beard,
            beard_color: src.beard_color,
            eye_color_1: src.eye_color_1,
            eye_color_2: src.eye_color_2,
            exp: src.exp,
            aa_points_spent: src.aa_points_spent,
            aa_exp: src.aa_exp,
            aa_points: src.aa_points,
            points: src.points,
            cur_hp: src.cur_hp,
            mana: src.mana,
            endurance: src.endurance,
            intoxication: src.intoxication,
            str: src.str,
            sta: src.sta,
            cha: src.cha,
            dex: src.dex,
            intelligence: src.intelligence,
            agi: src.agi,
            wis: src.wis,
            zone_change_count: src.zone_change_count,
            hunger_level: src.hunger_level,
            thirst_level: src.thirst_level,
            pvp_status: src.pvp_status,
            air_remaining: src.air_remaining,
            autosplit_enabled: src.autosplit_enabled,
            mailkey: src.mailkey,
            firstlogon: src.firstlogon,
            e_aa_effects: src.e_aa_effects,
            e_percent_to_aa: src.e_percent_to_aa,
            e_expended_aa_spent: src.e_expended_aa_spent,
            showhelm: src.show_helm,
        }
    }
}

impl SourceRow for SourceCharacterData {
    const TABLE: TransferTable = TransferTable::CharacterData;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "account_id",
        "name",
        "last_name",
        "title",
        "suffix",
        "zone_id",
        "y",
        "x",
        "z",
        "heading",
        "gender",
        "race",
        "class",
        "level",
        "deity",
        "birthday",
        "last_login",
        "time_played",
        "level2",
        "anon",
        "gm",
        "face",
        "hair_color",
        "hair_style",
        "beard",
        "beard_color",
        "eye_color_1",
        "eye_color_2",
        "exp",
        "aa_points_spent",
        "aa_exp",
        "aa_points",
        "points",
        "cur_hp",
        "mana",
        "endurance",
        "intoxication",
        "str",
        "sta",
        "cha",
        "dex",
        "int",
        "agi",
        "wis",
        "zone_change_count",
        "hunger_level",
        "thirst_level",
        "show_helm",
        "pvp_status",
        "air_remaining",
        "autosplit_enabled",
        "mailkey",
        "firstlogon",
        "e_aa_effects",
        "e_percent_to_aa",
        "e_expended_aa_spent",
    ];

    type Destination = CharacterData;

    fn into_destination(self) -> Result<Option<CharacterData>, CoreError> {
        Ok(Some(self.into()))
    }
}

impl DestinationRow for CharacterData {
    const TABLE: TransferTable = TransferTable::CharacterData;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "account_id",
        "forum_id",
        "name",
        "last_name",
        "title",
        "suffix",
        "zone_id",
        "y",
        "x",
        "z",
        "heading",
        "gender",
        "race",
        "class",
        "level",
        "deity",
        "birthday",
        "last_login",
        "time_played",
        "level2",
        "anon",
        "gm",
        "face",
        "hair_color",
        "hair_style",
        "beard",
        "beard_color",
        "eye_color_1",
        "eye_color_2",
        "exp",
        "aa_points_spent",
        "aa_exp",
        "aa_points",
        "points",
        "cur_hp",
        "mana",
        "endurance",
        "intoxication",
        "str",
        "sta",
        "cha",
        "dex",
        "int",
        "agi",
        "wis",
        "zone_change_count",
        "hunger_level",
        "thirst_level",
        "pvp_status",
        "air_remaining",
        "autosplit_enabled",
        "mailkey",
        "firstlogon",
        "e_aa_effects",
        "e_percent_to_aa",
        "e_expended_aa_spent",
        "showhelm",
    ];

    fn bind_values<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(self.id)
            .bind(self.account_id)
            .bind(self.forum_id)
            .bind(&self.name)
            .bind(&self.last_name)
            .bind(&self.title)
            .bind(&self.suffix)
            .bind(self.zone_id)
            .bind(self.y)
            .bind(self.x)
            .bind(self.z)
            .bind(self.heading)
            .bind(self.gender)
            .bind(self.race)
            .bind(self.class_id)
            .bind(self.level)
            .bind(self.deity)
            .bind(self.birthday)
            .bind(self.last_login)
            .bind(self.time_played)
            .bind(self.level2)
            .bind(self.anon)
            .bind(self.gm)
            .bind(self.face)
            .bind(self.hair_color)
            .bind(self.hair_style)
            .bind(self.beard)
            .bind(self.beard_color)
            .bind(self.eye_color_1)
            .bind(self.eye_color_2)
            .bind(self.exp)
            .bind(self.aa_points_spent)
            .bind(self.aa_exp)
            .bind(self.aa_points)
            .bind(self.points)
            .bind(self.cur_hp)
            .bind(self.mana)
            .bind(self.endurance)
            .bind(self.intoxication)
            .bind(self.str)
            .bind(self.sta)
            .bind(self.cha)
            .bind(self.dex)
            .bind(self.intelligence)
            .bind(self.agi)
            .bind(self.wis)
            .bind(self.zone_change_count)
            .bind(self.hunger_level)
            .bind(self.thirst_level)
            .bind(self.pvp_status)
            .bind(self.air_remaining)
            .bind(self.autosplit_enabled)
            .bind(&self.mailkey)
            .bind(self.firstlogon)
            .bind(self.e_aa_effects)
            .bind(self.e_percent_to_aa)
            .bind(self.e_expended_aa_spent)
            .bind(self.showhelm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soandso() -> SourceCharacterData {
        SourceCharacterData {
            id: 1,
            account_id: 42,
            name: "Soandso".to_string(),
            last_name: "Ofnorrath".to_string(),
            title: String::new(),
            suffix: String::new(),
            zone_id: 54,
            y: 10.0,
            x: -20.0,
            z: 3.0,
            heading: 64.0,
            gender: 1,
            race: 330,
            class_id: 6,
            level: 50,
            deity: 215,
            birthday: 1_600_000_000,
            last_login: 1_700_000_000,
            time_played: 123_456,
            level2: 50,
            anon: 0,
            gm: 0,
            face: 2,
            hair_color: 1,
            hair_style: 1,
            beard: 0,
            beard_color: 0,
            eye_color_1: 4,
            eye_color_2: 4,
            exp: 987,
            aa_points_spent: 12,
            aa_exp: 300,
            aa_points: 2,
            points: 5,
            cur_hp: 2400,
            mana: 3100,
            endurance: 900,
            intoxication: 0,
            str: 90,
            sta: 100,
            cha: 80,
            dex: 85,
            intelligence: 75,
            agi: 95,
            wis: 200,
            zone_change_count: 17,
            hunger_level: 4500,
            thirst_level: 4400,
            pvp_status: 0,
            show_helm: 1,
            air_remaining: 60,
            autosplit_enabled: 1,
            mailkey: "ABCDEF0123456789".to_string(),
            firstlogon: 1,
            e_aa_effects: 0,
            e_percent_to_aa: 25,
            e_expended_aa_spent: 0,
        }
    }

    #[test]
    fn forum_id_is_forced_to_zero() {
        assert_eq!(CharacterData::from(soandso()).forum_id, 0);
    }

    #[test]
    fn show_helm_lands_in_showhelm() {
        let mut src = soandso();
        src.show_helm = 0;
        assert_eq!(CharacterData::from(src).showhelm, 0);
        assert_eq!(CharacterData::from(soandso()).showhelm, 1);
    }

    #[test]
    fn reserved_word_columns_carry_their_values() {
        let data = CharacterData::from(soandso());
        assert_eq!(data.class_id, 6);
        assert_eq!(data.intelligence, 75);
    }

    #[test]
    fn core_fields_are_copied() {
        let data = CharacterData::from(soandso());
        assert_eq!(data.id, 1);
        assert_eq!(data.account_id, 42);
        assert_eq!(data.name, "Soandso");
        assert_eq!(data.zone_id, 54);
        assert_eq!((data.x, data.y, data.z), (-20.0, 10.0, 3.0));
        assert_eq!(data.level, 50);
        assert_eq!(data.mailkey, "ABCDEF0123456789");
        assert_eq!(data.e_percent_to_aa, 25);
    }

    #[test]
    fn destination_has_one_more_column_than_source_selects() {
        assert_eq!(<SourceCharacterData as SourceRow>::COLUMNS.len(), 57);
        assert_eq!(<CharacterData as DestinationRow>::COLUMNS.len(), 58);
        assert!(<CharacterData as DestinationRow>::COLUMNS.contains(&"showhelm"));
        assert!(!<CharacterData as DestinationRow>::COLUMNS.contains(&"show_helm"));
    }

    #[test]
    fn serialized_fields_use_destination_column_names() {
        let value = serde_json::to_value(CharacterData::from(soandso())).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 58);
        for column in <CharacterData as DestinationRow>::COLUMNS {
            assert!(object.contains_key(*column), "missing {column}");
        }
    }
}

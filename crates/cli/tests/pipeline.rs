//! Integration tests for the transfer pipeline.
//!
//! Runs the full resolve → clean → transfer sequence against in-memory
//! row sources and sinks that store rows as JSON objects keyed by column
//! name, so every mapping is checked by the column names it produces.

use std::collections::HashMap;
use std::sync::Mutex;

use assert_matches::assert_matches;
use serde::Serialize;
use serde_json::{json, Value};

use chartransfer_cli::error::{Stage, TransferError};
use chartransfer_cli::pipeline;
use chartransfer_core::error::CoreError;
use chartransfer_core::identity::Identity;
use chartransfer_core::tables::{CleanupTarget, TransferPlan, TransferTable};
use chartransfer_core::types::DbId;
use chartransfer_db::models::account::SourceAccount;
use chartransfer_db::models::account_ip::AccountIp;
use chartransfer_db::models::character_bind::SourceCharacterBind;
use chartransfer_db::models::character_currency::CharacterCurrency;
use chartransfer_db::models::character_data::SourceCharacterData;
use chartransfer_db::models::faction_value::SourceFactionValue;
use chartransfer_db::models::inventory::SourceInventoryItem;
use chartransfer_db::models::language::CharacterLanguage;
use chartransfer_db::models::skill::CharacterSkill;
use chartransfer_db::models::spell::{CharacterMemorizedSpell, CharacterSpell};
use chartransfer_db::store::{DestinationRow, RowSink, RowSource, SourceRow};

// ---------------------------------------------------------------------------
// In-memory source and sink
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemorySource {
    characters: Vec<(String, Identity)>,
    tables: HashMap<&'static str, Vec<Value>>,
}

impl MemorySource {
    fn character(mut self, name: &str, identity: Identity) -> Self {
        self.characters.push((name.to_string(), identity));
        self
    }

    fn rows<T: Serialize>(mut self, table: &'static str, rows: &[T]) -> Self {
        let entry = self.tables.entry(table).or_default();
        entry.extend(rows.iter().map(|r| serde_json::to_value(r).unwrap()));
        self
    }

    fn raw(mut self, table: &'static str, row: Value) -> Self {
        self.tables.entry(table).or_default().push(row);
        self
    }
}

impl RowSource for MemorySource {
    async fn find_identities(&self, name: &str) -> Result<Vec<Identity>, sqlx::Error> {
        Ok(self
            .characters
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, identity)| *identity)
            .collect())
    }

    async fn fetch_rows<R: SourceRow>(&self, key: DbId) -> Result<Vec<R>, sqlx::Error> {
        let key_column = R::TABLE.source_key_column();
        self.tables
            .get(R::TABLE.source_table())
            .into_iter()
            .flatten()
            .filter(|row| row[key_column].as_i64() == Some(key))
            .map(|row| {
                serde_json::from_value(row.clone()).map_err(|e| sqlx::Error::Decode(Box::new(e)))
            })
            .collect()
    }
}

#[derive(Default)]
struct MemorySink {
    tables: Mutex<HashMap<&'static str, Vec<Value>>>,
    fail_on: Option<&'static str>,
}

impl MemorySink {
    fn failing_on(table: &'static str) -> Self {
        Self {
            fail_on: Some(table),
            ..Self::default()
        }
    }

    fn seed(&self, table: &'static str, row: Value) {
        self.tables.lock().unwrap().entry(table).or_default().push(row);
    }

    fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn count(&self, table: &str) -> usize {
        self.rows(table).len()
    }

    fn snapshot(&self) -> HashMap<&'static str, Vec<Value>> {
        self.tables.lock().unwrap().clone()
    }
}

impl RowSink for MemorySink {
    async fn delete_rows(&self, target: &CleanupTarget, key: DbId) -> Result<u64, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let Some(rows) = tables.get_mut(target.table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| row[target.key_column].as_i64() != Some(key));
        Ok((before - rows.len()) as u64)
    }

    async fn insert_rows<R: DestinationRow>(&self, rows: &[R]) -> Result<u64, sqlx::Error> {
        let table = R::TABLE.destination_table();
        if self.fail_on == Some(table) && !rows.is_empty() {
            return Err(sqlx::Error::Protocol(format!(
                "Duplicate entry '1' for key '{table}.PRIMARY'"
            )));
        }
        let encoded: Vec<Value> = rows
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        let written = encoded.len() as u64;
        self.tables
            .lock()
            .unwrap()
            .entry(table)
            .or_default()
            .extend(encoded);
        Ok(written)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const SOANDSO: Identity = Identity {
    character_id: 1,
    account_id: 42,
    ls_account_id: Some(9001),
};

const OTHER: Identity = Identity {
    character_id: 2,
    account_id: 43,
    ls_account_id: None,
};

fn account(id: i32) -> SourceAccount {
    SourceAccount {
        id,
        name: format!("login{id}"),
        charname: "Soandso".into(),
        sharedplat: 100,
        password: String::new(),
        status: 0,
        lsaccount_id: Some(9001),
        gmspeed: 0,
        flymode: 0,
        ignore_tells: 0,
        revoked: 0,
        karma: 2,
        minilogin_ip: String::new(),
        hideme: 0,
        rulesflag: 0,
        suspendeduntil: None,
        time_creation: 1_650_000_000,
        ban_reason: None,
        suspend_reason: None,
    }
}

fn account_ip(accid: i32, ip: &str) -> AccountIp {
    AccountIp {
        accid,
        ip: ip.into(),
        count: 3,
        lastused: chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

fn bind(id: u32, slot: i32) -> SourceCharacterBind {
    SourceCharacterBind {
        id,
        slot,
        zone_id: 202,
        x: 0.0,
        y: 0.0,
        z: 0.0,
        heading: 0.0,
    }
}

fn faction(char_id: i32, faction_id: i32) -> SourceFactionValue {
    SourceFactionValue {
        char_id,
        faction_id,
        current_value: -250,
        temp: 0,
    }
}

fn character_data(id: u32, account_id: i32, name: &str) -> SourceCharacterData {
    SourceCharacterData {
        id,
        account_id,
        name: name.into(),
        last_name: String::new(),
        title: String::new(),
        suffix: String::new(),
        zone_id: 202,
        y: 0.0,
        x: 0.0,
        z: 0.0,
        heading: 0.0,
        gender: 0,
        race: 1,
        class_id: 1,
        level: 1,
        deity: 396,
        birthday: 1_650_000_000,
        last_login: 1_650_000_100,
        time_played: 60,
        level2: 1,
        anon: 0,
        gm: 0,
        face: 0,
        hair_color: 0,
        hair_style: 0,
        beard: 0,
        beard_color: 0,
        eye_color_1: 0,
        eye_color_2: 0,
        exp: 0,
        aa_points_spent: 0,
        aa_exp: 0,
        aa_points: 0,
        points: 0,
        cur_hp: 20,
        mana: 0,
        endurance: 0,
        intoxication: 0,
        str: 75,
        sta: 75,
        cha: 75,
        dex: 75,
        intelligence: 75,
        agi: 75,
        wis: 75,
        zone_change_count: 0,
        hunger_level: 6000,
        thirst_level: 6000,
        pvp_status: 0,
        show_helm: 1,
        air_remaining: 60,
        autosplit_enabled: 0,
        mailkey: String::new(),
        firstlogon: 1,
        e_aa_effects: 0,
        e_percent_to_aa: 0,
        e_expended_aa_spent: 0,
    }
}

fn currency(id: u32) -> CharacterCurrency {
    CharacterCurrency {
        id,
        platinum: 1,
        gold: 2,
        silver: 3,
        copper: 4,
        platinum_bank: 5,
        gold_bank: 6,
        silver_bank: 7,
        copper_bank: 8,
        platinum_cursor: 9,
        gold_cursor: 10,
        silver_cursor: 11,
        copper_cursor: 12,
    }
}

fn inventory(charid: u32, slotid: u32) -> SourceInventoryItem {
    SourceInventoryItem {
        charid,
        slotid,
        itemid: Some(8005),
        charges: Some(1),
    }
}

/// The scenario character: 1 account, 3 IPs, binds in slots 0 and 2,
/// 1 character row, 5 factions, plus worn items and rows belonging to
/// another character on the same server.
fn soandso_source() -> MemorySource {
    MemorySource::default()
        .character("Soandso", SOANDSO)
        .character("Other", OTHER)
        .rows("account", &[account(42), account(43)])
        .rows(
            "account_ip",
            &[
                account_ip(42, "10.0.0.1"),
                account_ip(42, "10.0.0.2"),
                account_ip(42, "10.0.0.3"),
                account_ip(43, "10.0.0.9"),
            ],
        )
        .rows("character_bind", &[bind(1, 0), bind(1, 2), bind(2, 0)])
        .rows(
            "character_data",
            &[character_data(1, 42, "Soandso"), character_data(2, 43, "Other")],
        )
        .rows(
            "faction_values",
            &(1..=5).map(|f| faction(1, f)).collect::<Vec<_>>(),
        )
        .rows("inventory", &[inventory(1, 13), inventory(1, 22)])
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolver_returns_single_identity() {
    let source = soandso_source();
    let identity = pipeline::resolve_identity(&source, "Soandso").await.unwrap();
    assert_eq!(identity, SOANDSO);
}

#[tokio::test]
async fn unknown_character_fails_before_touching_destination() {
    let source = soandso_source();
    let sink = MemorySink::default();
    sink.seed("character_data", json!({ "id": 1, "name": "Stale" }));

    let err = pipeline::run(&source, &sink, "Nobody", &TransferPlan::default())
        .await
        .unwrap_err();

    assert_matches!(err, TransferError::Core(CoreError::CharacterNotFound { ref name }) if name == "Nobody");
    assert_eq!(err.exit_code(), 2);
    assert_eq!(sink.count("character_data"), 1);
}

#[tokio::test]
async fn duplicate_names_are_rejected() {
    let source = MemorySource::default()
        .character("Twin", SOANDSO)
        .character("Twin", OTHER);
    let err = pipeline::resolve_identity(&source, "Twin").await.unwrap_err();
    assert_matches!(
        err,
        TransferError::Core(CoreError::AmbiguousCharacter { matches: 2, .. })
    );
    assert_eq!(err.exit_code(), 1);
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

#[tokio::test]
async fn soandso_scenario_lands_expected_rows() {
    let source = soandso_source();
    let sink = MemorySink::default();

    let report = pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();

    assert_eq!(sink.count("account"), 1);
    assert_eq!(sink.count("account_ip"), 3);
    assert_eq!(sink.count("character_bind"), 1);
    assert_eq!(sink.count("character_data"), 1);
    assert_eq!(sink.count("character_faction_values"), 5);
    assert_eq!(sink.count("character_inventory"), 0);

    let account = &sink.rows("account")[0];
    assert_eq!(account["expansion"], 12);
    assert_eq!(account["suspendeduntil"], "0000-00-00 00:00:00");

    let bind = &sink.rows("character_bind")[0];
    assert_eq!(bind["is_home"], 0);
    assert!(bind.get("slot").is_none());

    let data = &sink.rows("character_data")[0];
    assert_eq!(data["forum_id"], 0);
    assert_eq!(data["name"], "Soandso");
    assert_eq!(data["showhelm"], 1);

    assert!(sink
        .rows("character_faction_values")
        .iter()
        .all(|row| row["id"] == 1));

    assert_eq!(report.identity, SOANDSO);
    assert_eq!(report.tables.len(), 10);
    assert!(report.outcome(TransferTable::Inventory).is_none());
    let binds = report.outcome(TransferTable::CharacterBind).unwrap();
    assert_eq!((binds.read, binds.written, binds.skipped), (2, 1, 1));
    assert_eq!(report.rows_written(), 11);
}

#[tokio::test]
async fn source_expansion_is_ignored() {
    let mut row = serde_json::to_value(account(42)).unwrap();
    row["expansion"] = json!(3);
    let source = MemorySource::default()
        .character("Soandso", SOANDSO)
        .raw("account", row);
    let sink = MemorySink::default();

    pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();

    assert_eq!(sink.rows("account")[0]["expansion"], 12);
}

#[tokio::test]
async fn bind_slots_above_one_are_dropped() {
    let source = MemorySource::default()
        .character("Soandso", SOANDSO)
        .rows("character_bind", &[bind(1, 0), bind(1, 1), bind(1, 2), bind(1, 3)]);
    let sink = MemorySink::default();

    pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();

    let flags: Vec<i64> = sink
        .rows("character_bind")
        .iter()
        .map(|row| row["is_home"].as_i64().unwrap())
        .collect();
    assert_eq!(flags, vec![0, 1]);
}

#[tokio::test]
async fn straight_copy_tables_keep_counts_and_values() {
    let languages: Vec<CharacterLanguage> = (0..4)
        .map(|lang_id| CharacterLanguage {
            id: 1,
            lang_id,
            value: 100,
        })
        .collect();
    let spells: Vec<CharacterSpell> = (0..6)
        .map(|slot_id| CharacterSpell {
            id: 1,
            slot_id,
            spell_id: 200 + slot_id,
        })
        .collect();
    let memmed: Vec<CharacterMemorizedSpell> = (0..2)
        .map(|slot_id| CharacterMemorizedSpell {
            id: 1,
            slot_id,
            spell_id: 200 + slot_id,
        })
        .collect();
    let skills: Vec<CharacterSkill> = (0..3)
        .map(|skill_id| CharacterSkill {
            id: 1,
            skill_id,
            value: 5 * skill_id,
        })
        .collect();

    let source = MemorySource::default()
        .character("Soandso", SOANDSO)
        .rows("character_currency", &[currency(1), currency(2)])
        .rows("character_languages", &languages)
        .rows("character_spells", &spells)
        .rows("character_memmed_spells", &memmed)
        .rows("character_skills", &skills);
    let sink = MemorySink::default();

    pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();

    assert_eq!(
        sink.rows("character_currency"),
        vec![serde_json::to_value(currency(1)).unwrap()]
    );
    assert_eq!(
        sink.rows("character_languages"),
        languages
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect::<Vec<_>>()
    );
    assert_eq!(sink.count("character_spells"), 6);
    assert_eq!(sink.rows("character_spells")[5]["spell_id"], 205);
    assert_eq!(sink.count("character_memmed_spells"), 2);
    assert_eq!(sink.count("character_skills"), 3);
    assert_eq!(sink.rows("character_skills")[2]["value"], 10);
}

#[tokio::test]
async fn character_without_rows_writes_nothing() {
    let source = MemorySource::default().character("Fresh", OTHER);
    let sink = MemorySink::default();

    let report = pipeline::run(&source, &sink, "Fresh", &TransferPlan::default())
        .await
        .unwrap();

    assert_eq!(report.rows_written(), 0);
    assert!(report.tables.iter().all(|t| t.read == 0));
}

// ---------------------------------------------------------------------------
// Idempotence and cleanup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rerunning_yields_the_same_destination() {
    let source = soandso_source();
    let sink = MemorySink::default();

    pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();
    let first = sink.snapshot();

    let second_report = pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap();

    assert_eq!(sink.snapshot(), first);
    assert_eq!(second_report.purged, 11);
}

#[tokio::test]
async fn cleanup_only_touches_the_resolved_identity() {
    let sink = MemorySink::default();
    sink.seed("character_inventory", json!({ "id": 1, "slotid": 21 }));
    sink.seed("character_inventory", json!({ "id": 2, "slotid": 0 }));
    sink.seed("account_ip", json!({ "accid": 43, "ip": "10.0.0.9" }));

    let purged = pipeline::clean_destination(&sink, &SOANDSO).await.unwrap();

    assert_eq!(purged, 1);
    assert_eq!(sink.rows("character_inventory"), vec![json!({ "id": 2, "slotid": 0 })]);
    assert_eq!(sink.count("account_ip"), 1);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_failure_stops_the_run_with_driver_message() {
    let source = soandso_source();
    let sink = MemorySink::failing_on("character_data");

    let err = pipeline::run(&source, &sink, "Soandso", &TransferPlan::default())
        .await
        .unwrap_err();

    assert_matches!(
        err,
        TransferError::Database {
            stage: Stage::Transfer(TransferTable::CharacterData),
            ..
        }
    );
    assert!(err
        .to_string()
        .contains("Duplicate entry '1' for key 'character_data.PRIMARY'"));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(sink.count("character_bind"), 1);
    assert_eq!(sink.count("character_data"), 0);
    assert_eq!(sink.count("character_faction_values"), 0);
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inventory_is_translated_when_requested() {
    let source = soandso_source();
    let sink = MemorySink::default();
    let plan = TransferPlan::default().with_inventory();

    let report = pipeline::run(&source, &sink, "Soandso", &plan).await.unwrap();

    let slots: Vec<i64> = sink
        .rows("character_inventory")
        .iter()
        .map(|row| row["slotid"].as_i64().unwrap())
        .collect();
    assert_eq!(slots, vec![13, 21]);
    assert_eq!(report.outcome(TransferTable::Inventory).unwrap().written, 2);
}

#[tokio::test]
async fn power_source_item_aborts_inventory_without_writing() {
    let source = MemorySource::default()
        .character("Soandso", SOANDSO)
        .rows("inventory", &[inventory(1, 13), inventory(1, 21)]);
    let sink = MemorySink::default();
    let plan = TransferPlan::default().with_inventory();

    let err = pipeline::run(&source, &sink, "Soandso", &plan)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        TransferError::Core(CoreError::UnmappedInventorySlot { slot_id: 21, .. })
    );
    assert_eq!(sink.count("character_inventory"), 0);
}

//! The linear run: resolve the character, purge the destination, then
//! copy each planned table in order.
//!
//! Every step is awaited before the next starts. The first error ends the
//! run; rerunning is safe because the purge removes whatever an earlier
//! run left behind.

use chartransfer_core::identity::Identity;
use chartransfer_core::tables::{cleanup_targets, TransferPlan, TransferTable};
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
use chartransfer_db::store::{RowSink, RowSource, SourceRow};

use crate::error::{Stage, TransferError};
use crate::report::{TableOutcome, TransferReport};

/// Look up the identity keys for `name` in the source database.
pub async fn resolve_identity<S: RowSource>(
    source: &S,
    name: &str,
) -> Result<Identity, TransferError> {
    let matches = source
        .find_identities(name)
        .await
        .map_err(|e| TransferError::database(Stage::Resolve, e))?;
    let identity = Identity::from_matches(name, matches)?;

    tracing::info!(
        character = name,
        character_id = identity.character_id,
        account_id = identity.account_id,
        ls_account_id = ?identity.ls_account_id,
        "Resolved character",
    );
    Ok(identity)
}

/// Delete every destination row owned by `identity`.
///
/// Each table is purged with its own statement; a failure part way leaves
/// the earlier tables empty and the later ones untouched.
pub async fn clean_destination<D: RowSink>(
    sink: &D,
    identity: &Identity,
) -> Result<u64, TransferError> {
    let mut purged = 0;
    for target in cleanup_targets() {
        let key = target.scope.key(identity);
        let removed = sink
            .delete_rows(&target, key)
            .await
            .map_err(|e| TransferError::database(Stage::Clean { table: target.table }, e))?;
        if removed > 0 {
            tracing::debug!(table = target.table, removed, "Purged destination rows");
        }
        purged += removed;
    }
    tracing::info!(purged, "Destination cleaned");
    Ok(purged)
}

/// Read, map and write one table.
///
/// All rows are mapped before the first insert, so a mapping error leaves
/// the destination table untouched.
pub async fn transfer_table<R, S, D>(
    source: &S,
    sink: &D,
    identity: &Identity,
) -> Result<TableOutcome, TransferError>
where
    R: SourceRow,
    S: RowSource,
    D: RowSink,
{
    let table = R::TABLE;
    let stage = Stage::Transfer(table);
    let key = table.scope().key(identity);

    let rows: Vec<R> = source
        .fetch_rows(key)
        .await
        .map_err(|e| TransferError::database(stage, e))?;
    let read = rows.len();

    let mut mapped = Vec::with_capacity(read);
    for row in rows {
        if let Some(out) = row.into_destination()? {
            mapped.push(out);
        }
    }
    let skipped = read - mapped.len();

    let written = sink
        .insert_rows(mapped.as_slice())
        .await
        .map_err(|e| TransferError::database(stage, e))?;

    tracing::info!(table = %table, read, written, skipped, "Table transferred");
    Ok(TableOutcome {
        table,
        read,
        written,
        skipped,
    })
}

async fn transfer<S: RowSource, D: RowSink>(
    table: TransferTable,
    source: &S,
    sink: &D,
    identity: &Identity,
) -> Result<TableOutcome, TransferError> {
    match table {
        TransferTable::Account => transfer_table::<SourceAccount, _, _>(source, sink, identity).await,
        TransferTable::AccountIp => transfer_table::<AccountIp, _, _>(source, sink, identity).await,
        TransferTable::CharacterBind => {
            transfer_table::<SourceCharacterBind, _, _>(source, sink, identity).await
        }
        TransferTable::CharacterCurrency => {
            transfer_table::<CharacterCurrency, _, _>(source, sink, identity).await
        }
        TransferTable::CharacterData => {
            transfer_table::<SourceCharacterData, _, _>(source, sink, identity).await
        }
        TransferTable::FactionValues => {
            transfer_table::<SourceFactionValue, _, _>(source, sink, identity).await
        }
        TransferTable::Inventory => {
            transfer_table::<SourceInventoryItem, _, _>(source, sink, identity).await
        }
        TransferTable::Languages => {
            transfer_table::<CharacterLanguage, _, _>(source, sink, identity).await
        }
        TransferTable::Spells => transfer_table::<CharacterSpell, _, _>(source, sink, identity).await,
        TransferTable::MemorizedSpells => {
            transfer_table::<CharacterMemorizedSpell, _, _>(source, sink, identity).await
        }
        TransferTable::Skills => transfer_table::<CharacterSkill, _, _>(source, sink, identity).await,
    }
}

/// Run the whole transfer for one character.
pub async fn run<S: RowSource, D: RowSink>(
    source: &S,
    sink: &D,
    character: &str,
    plan: &TransferPlan,
) -> Result<TransferReport, TransferError> {
    let identity = resolve_identity(source, character).await?;
    let purged = clean_destination(sink, &identity).await?;

    let mut tables = Vec::with_capacity(plan.tables().len());
    for &table in plan.tables() {
        tables.push(transfer(table, source, sink, &identity).await?);
    }

    Ok(TransferReport {
        character: character.to_string(),
        identity,
        purged,
        tables,
    })
}

//! Character lookups against the source schema.

use chartransfer_core::identity::Identity;
use sqlx::MySqlPool;

/// Ids are `INT` of mixed signedness across the two tables; casting keeps
/// the decoded types uniform.
const IDENTITY_QUERY: &str = "SELECT CAST(c.id AS SIGNED) AS character_id, \
            CAST(c.account_id AS SIGNED) AS account_id, \
            CAST(a.lsaccount_id AS SIGNED) AS ls_account_id \
     FROM character_data AS c \
     INNER JOIN account AS a ON a.id = c.account_id \
     WHERE c.name = ?";

pub struct CharacterRepo;

impl CharacterRepo {
    /// Every (character, account, login-server account) triple for `name`.
    ///
    /// Name comparison follows the column's collation.
    pub async fn find_identities(
        pool: &MySqlPool,
        name: &str,
    ) -> Result<Vec<Identity>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (i64, i64, Option<i64>)>(IDENTITY_QUERY)
            .bind(name)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(character_id, account_id, ls_account_id)| Identity {
                character_id,
                account_id,
                ls_account_id,
            })
            .collect())
    }
}

//! Constant overrides and value coercions shared by the column mappings.

use chrono::NaiveDateTime;

/// Expansion written for every transferred account, whatever the source says.
pub const DESTINATION_EXPANSION: u8 = 12;

/// The destination has no forum integration; every character gets 0.
pub const DESTINATION_FORUM_ID: i32 = 0;

/// Stand-in for a missing timestamp in NOT NULL destination columns.
pub const ZERO_DATE_SENTINEL: &str = "0000-00-00 00:00:00";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a nullable source timestamp for a non-nullable destination
/// `DATETIME` column. `None` becomes [`ZERO_DATE_SENTINEL`].
pub fn datetime_or_sentinel(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(ts) => ts.format(DATETIME_FORMAT).to_string(),
        None => ZERO_DATE_SENTINEL.to_string(),
    }
}

/// Bind slots the destination keeps: 0 is home, 1 is the primary bind.
pub fn is_portable_bind_slot(slot: i32) -> bool {
    matches!(slot, 0 | 1)
}

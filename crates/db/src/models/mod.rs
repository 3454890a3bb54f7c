//! Row models, one module per transferred table.
//!
//! Tables that are copied without any change share a single record type
//! for both sides; the others pair a `Source*` record with the
//! destination record it maps to.

/// Implements [`SourceRow`](crate::store::SourceRow) and
/// [`DestinationRow`](crate::store::DestinationRow) for a record whose
/// columns are identical in both schemas.
macro_rules! straight_copy {
    ($ty:ty, $table:expr, [$($field:ident),+ $(,)?]) => {
        impl $crate::store::SourceRow for $ty {
            const TABLE: ::chartransfer_core::tables::TransferTable = $table;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),+];

            type Destination = Self;

            fn into_destination(
                self,
            ) -> Result<Option<Self>, ::chartransfer_core::error::CoreError> {
                Ok(Some(self))
            }
        }

        impl $crate::store::DestinationRow for $ty {
            const TABLE: ::chartransfer_core::tables::TransferTable = $table;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn bind_values<'q>(
                &'q self,
                query: $crate::store::MySqlQuery<'q>,
            ) -> $crate::store::MySqlQuery<'q> {
                query$(.bind(&self.$field))+
            }
        }
    };
}

pub mod account;
pub mod account_ip;
pub mod character_bind;
pub mod character_currency;
pub mod character_data;
pub mod faction_value;
pub mod inventory;
pub mod language;
pub mod skill;
pub mod spell;

use chartransfer_core::error::CoreError;
use chartransfer_core::tables::TransferTable;

use crate::config::ConfigError;

/// Exit status when the character is absent from the source database.
pub const EXIT_CHARACTER_NOT_FOUND: u8 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// The step of a run a database error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Clean { table: &'static str },
    Transfer(TransferTable),
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve => f.write_str("character lookup"),
            Self::Clean { table } => write!(f, "cleanup of {table}"),
            Self::Transfer(table) => write!(f, "transfer of {table}"),
        }
    }
}

/// Anything that ends a run early.
///
/// Database errors keep the driver's message so constraint violations
/// caused by schema drift reach the operator verbatim.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to connect to database {database}: {source}")]
    Connect {
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error during {stage}: {source}")]
    Database {
        stage: Stage,
        #[source]
        source: sqlx::Error,
    },
}

impl TransferError {
    pub fn database(stage: Stage, source: sqlx::Error) -> Self {
        Self::Database { stage, source }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(CoreError::CharacterNotFound { .. }) => EXIT_CHARACTER_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

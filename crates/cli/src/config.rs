use sqlx::mysql::MySqlConnectOptions;

/// Default MySQL port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3306;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the source and destination schemas, which
/// live on the same MySQL server.
#[derive(Clone)]
pub struct TransferConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    password: String,
    /// Schema characters are read from.
    pub source_database: String,
    /// Schema characters are written to.
    pub destination_database: String,
}

impl std::fmt::Debug for TransferConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("source_database", &self.source_database)
            .field("destination_database", &self.destination_database)
            .finish()
    }
}

impl TransferConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Required | Default |
    /// |---------------------|----------|---------|
    /// | `HOST`              | yes      | --      |
    /// | `PORT`              | no       | `3306`  |
    /// | `USERNAME`          | yes      | --      |
    /// | `PASSWD`            | yes, may be empty | -- |
    /// | `EQEMU_DATABASE`    | yes      | --      |
    /// | `EQMACEMU_DATABASE` | yes      | --      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let host = required("HOST")?;
        let username = required("USERNAME")?;
        let password = lookup("PASSWD").ok_or(ConfigError::Missing("PASSWD"))?;
        let source_database = required("EQEMU_DATABASE")?;
        let destination_database = required("EQMACEMU_DATABASE")?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
            })?,
        };

        Ok(Self {
            host,
            port,
            username,
            password,
            source_database,
            destination_database,
        })
    }

    pub fn source_options(&self) -> MySqlConnectOptions {
        self.connect_options(&self.source_database)
    }

    pub fn destination_options(&self) -> MySqlConnectOptions {
        self.connect_options(&self.destination_database)
    }

    fn connect_options(&self, database: &str) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(database)
    }
}

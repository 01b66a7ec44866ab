//! Gateway configuration.
//!
//! Loaded once at startup from the environment (and an optional `.env` file)
//! and passed by reference to the constructors that need it. Nothing below the
//! service layer reads environment variables.

use payment_gateway_settlement::remote::config::DEFAULT_TIMEOUT_SECS;
use payment_gateway_settlement::{BankEnvironment, RemoteBankConfig};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Which settlement backend invoices go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlementMode {
    #[default]
    Local,
    Remote,
}

impl FromStr for SettlementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(SettlementMode::Local),
            "remote" => Ok(SettlementMode::Remote),
            other => Err(format!("expected 'local' or 'remote', got '{other}'")),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    /// Apply pending migrations when connecting.
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Credentials go through the driver's options rather than a URL, so
    /// reserved characters in the password need no escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub environment: BankEnvironment,
    pub client_id: String,
    pub client_secret: String,
    /// Directory holding the client certificate and key.
    pub tls_path: String,
    /// Replaces the environment's base URL when set.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl BankConfig {
    pub fn provider_config(&self) -> RemoteBankConfig {
        let config = RemoteBankConfig::new(
            self.environment,
            self.client_id.clone(),
            self.client_secret.clone(),
            self.tls_path.clone(),
        )
        .with_timeout(self.timeout);

        match &self.base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    }
}

impl fmt::Debug for BankConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankConfig")
            .field("environment", &self.environment)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("tls_path", &self.tls_path)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub database: DatabaseConfig,
    pub bank: BankConfig,
    pub settlement_mode: SettlementMode,
    /// Port for the HTTP layer hosting these services.
    pub http_port: u16,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DB_HOST` (default `db`), `DB_PORT` (`5432`), `DB_USER` (`postgres`),
    ///   `DB_PASSWORD` (`postgres`), `DB_NAME` (`gateway`), `DB_SSL_MODE`
    ///   (`disable`), `DB_MAX_CONNECTIONS` (`10`), `DB_RUN_MIGRATIONS` (`false`)
    /// - `HTTP_PORT` (`8080`)
    /// - `SETTLEMENT_MODE`: `local` (default) or `remote`
    /// - `ENV`: `prod` selects the bank's production API, anything else the sandbox
    /// - `INTERBANK_CLIENT_ID`, `INTERBANK_CLIENT_SECRET`: required in remote mode
    /// - `INTERBANK_TLS_PATH` (`cert/`), `INTERBANK_API_URL` (optional),
    ///   `INTERBANK_TIMEOUT_SECS` (`30`)
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingEnvVar` when remote mode lacks bank credentials,
    /// `ConfigError::InvalidValue` when a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Lookup(lookup);

        let database = DatabaseConfig {
            host: vars.optional("DB_HOST", "db"),
            port: vars.optional_parsed("DB_PORT", 5432)?,
            user: vars.optional("DB_USER", "postgres"),
            password: vars.optional("DB_PASSWORD", "postgres"),
            name: vars.optional("DB_NAME", "gateway"),
            ssl_mode: vars.optional_parsed("DB_SSL_MODE", PgSslMode::Disable)?,
            max_connections: vars.optional_parsed("DB_MAX_CONNECTIONS", 10)?,
            run_migrations: vars.optional_parsed("DB_RUN_MIGRATIONS", false)?,
        };

        let settlement_mode: SettlementMode =
            vars.optional_parsed("SETTLEMENT_MODE", SettlementMode::Local)?;

        let environment = match vars.get("ENV").as_deref() {
            Some("prod") => BankEnvironment::Production,
            _ => BankEnvironment::Sandbox,
        };
        let (client_id, client_secret) = match settlement_mode {
            SettlementMode::Remote => (
                vars.required("INTERBANK_CLIENT_ID")?,
                vars.required("INTERBANK_CLIENT_SECRET")?,
            ),
            SettlementMode::Local => (
                vars.optional("INTERBANK_CLIENT_ID", ""),
                vars.optional("INTERBANK_CLIENT_SECRET", ""),
            ),
        };
        let bank = BankConfig {
            environment,
            client_id,
            client_secret,
            tls_path: vars.optional("INTERBANK_TLS_PATH", "cert/"),
            base_url: vars.get("INTERBANK_API_URL").filter(|url| !url.is_empty()),
            timeout: Duration::from_secs(
                vars.optional_parsed("INTERBANK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ),
        };

        Ok(Self {
            database,
            bank,
            settlement_mode,
            http_port: vars.optional_parsed("HTTP_PORT", 8080)?,
        })
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn optional(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn optional_parsed<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => Ok(default),
        }
    }
}

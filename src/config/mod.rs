//! Action server configuration
//!
//! Configuration is layered with the `config` crate: built-in defaults, then
//! an optional `actions.toml` in the working directory, then environment
//! variables prefixed with `IT_SUPPORT_ACTIONS` (nested keys separated by
//! `__`). A `.env` file is honoured in development via `dotenvy`.
//!
//! - `IT_SUPPORT_ACTIONS__BACKEND__KIND=table` -> `backend.kind = table`
//! - `IT_SUPPORT_ACTIONS__TICKETS__NUMBERING=unique` -> `tickets.numbering = unique`

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub use crate::ports::mock::TicketNumbering;
use crate::ports::mock::DEFAULT_TICKET_PREFIX;

const ENV_PREFIX: &str = "IT_SUPPORT_ACTIONS";
const CONFIG_FILE: &str = "actions";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 2_000;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ActionsConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub tickets: TicketConfig,
}

/// Which backend implementation serves the lookups
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Canned in-memory results
    #[default]
    Mock,
    /// JSON inventory file
    Table,
}

/// Backend selection and lookup limits
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,

    /// Inventory document for the `table` backend
    pub inventory_path: Option<PathBuf>,

    /// Upper bound on a single backend lookup
    pub lookup_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            inventory_path: None,
            lookup_timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
        }
    }
}

impl BackendConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

/// Ticket numbering
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TicketConfig {
    pub prefix: String,
    pub numbering: TicketNumbering,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TICKET_PREFIX.to_string(),
            numbering: TicketNumbering::default(),
        }
    }
}

impl ActionsConfig {
    /// Load configuration from `actions.toml` (optional) and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value cannot be
    /// parsed into the expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::load_with(Self::environment())
    }

    /// Environment layer; reads the process environment unless given a
    /// `source` map
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(environment: config::Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Check semantic constraints that deserialization cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend.kind == BackendKind::Table && self.backend.inventory_path.is_none() {
            return Err(ValidationError::MissingRequired("backend.inventory_path"));
        }

        if self.backend.lookup_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        let prefix = &self.tickets.prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidTicketPrefix);
        }

        Ok(())
    }
}

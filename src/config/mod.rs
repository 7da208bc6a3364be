#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::catalog::default_catalog;
use crate::core::roster::InMemoryRosterStore;
use crate::domain::model::Activity;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Fully resolved settings the server starts with.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub enforce_capacity: bool,
    pub activities: Vec<Activity>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            enforce_capacity: false,
            activities: default_catalog(),
        }
    }
}

impl ServiceConfig {
    /// Layers `overrides` on top of an optional TOML file, falling back to
    /// the built-in defaults and catalog.
    pub fn resolve<C: ConfigProvider>(overrides: &C, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();

        let host = overrides
            .host()
            .or_else(|| file.and_then(|f| f.host()))
            .map(str::to_string)
            .unwrap_or(defaults.host);
        let port = overrides
            .port()
            .or_else(|| file.and_then(|f| f.port()))
            .unwrap_or(defaults.port);
        let enforce_capacity = overrides
            .enforce_capacity()
            .or_else(|| file.and_then(|f| f.enforce_capacity()))
            .unwrap_or(defaults.enforce_capacity);
        let activities = file
            .and_then(TomlConfig::catalog)
            .unwrap_or(defaults.activities);

        Self {
            host,
            port,
            enforce_capacity,
            activities,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| RosterError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: format!("not a valid bind address: {}", e),
            })
    }

    pub fn build_store(&self) -> Result<InMemoryRosterStore> {
        Ok(InMemoryRosterStore::new(self.activities.clone())?
            .with_capacity_enforcement(self.enforce_capacity))
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        self.bind_addr()?;
        crate::core::catalog::validate_catalog(&self.activities)
    }
}

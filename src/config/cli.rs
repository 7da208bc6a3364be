use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "activity-roster")]
#[command(about = "Extracurricular activity signup service")]
pub struct CliConfig {
    /// Address to bind (default 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8000, 0 picks a free port)
    #[arg(long)]
    pub port: Option<u16>,

    /// TOML file with [server], [roster] and [[activities]] sections
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long, conflicts_with = "no_enforce_capacity")]
    pub enforce_capacity: bool,

    /// Keep capacity advisory even if the catalog file enforces it
    #[arg(long)]
    pub no_enforce_capacity: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn port(&self) -> Option<u16> {
        self.port
    }

    fn enforce_capacity(&self) -> Option<bool> {
        // 未指定旗標時交給 TOML 設定決定
        match (self.enforce_capacity, self.no_enforce_capacity) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = &self.host {
            validate_non_empty_string("host", host)?;
        }
        if let Some(catalog) = &self.catalog {
            validate_file_extension("catalog", catalog, &["toml"])?;
        }
        Ok(())
    }
}

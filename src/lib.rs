pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::client::RosterClient;
pub use adapters::http::{router, serve, SharedStore};
pub use config::ServiceConfig;
pub use core::roster::InMemoryRosterStore;
pub use domain::model::{Activity, Enrollment, RosterSnapshot};
pub use domain::ports::RosterStore;
pub use utils::error::{Result, RosterError};

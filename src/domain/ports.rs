use crate::domain::model::{Activity, Enrollment, RosterSnapshot};
use crate::utils::error::Result;

/// Canonical roster state shared by every request handler.
///
/// Each call is atomic: it either succeeds completely or leaves the store
/// untouched.
pub trait RosterStore: Send + Sync {
    fn list(&self) -> RosterSnapshot;
    fn get(&self, activity: &str) -> Result<Activity>;
    fn enroll(&self, activity: &str, email: &str) -> Result<Enrollment>;
    fn withdraw(&self, activity: &str, email: &str) -> Result<Enrollment>;
}

/// A source of service settings. `None` means the source leaves the value to
/// the next layer (command line over TOML file over built-in defaults).
pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> Option<&str>;
    fn port(&self) -> Option<u16>;
    fn enforce_capacity(&self) -> Option<bool>;
}

pub mod catalog;
pub mod roster;

pub use crate::domain::model::{Activity, Enrollment, RosterSnapshot};
pub use crate::domain::ports::{ConfigProvider, RosterStore};
pub use crate::utils::error::Result;

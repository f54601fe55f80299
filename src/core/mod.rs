pub mod fetcher;
pub mod session;
pub mod submission;
pub mod tracker;

pub use crate::domain::model::{Planet, Slot, Vehicle};
pub use crate::domain::ports::{ConfigProvider, FalconeApi};
pub use crate::utils::error::Result;

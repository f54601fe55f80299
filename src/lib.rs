pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpFalconeApi;
pub use app::Mission;
pub use config::toml_config::TomlConfig;
pub use core::{session::Session, tracker::SelectionTracker};
pub use utils::error::{FalconeError, Result};

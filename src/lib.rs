pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::api::{app, AppState};
pub use crate::core::{directory::Directory, termination::SeverancePolicy};
pub use crate::utils::error::{DirectoryError, Result};

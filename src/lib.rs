pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, site::SiteConfig, FolioConfig};
pub use crate::core::{engine::FolioEngine, loader::HttpDataSource};
pub use utils::error::{FolioError, Result};

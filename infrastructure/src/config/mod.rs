//! Configuration loading (TOML files + environment)

pub mod file_config;
pub mod loader;

pub use file_config::{FileApiConfig, FileConfig, FileConsensusConfig, FileModelsConfig};
pub use loader::ConfigLoader;

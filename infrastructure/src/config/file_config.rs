//! Configuration file schema
//!
//! Example configuration:
//!
//! ```toml
//! [api]
//! endpoint = "https://generativelanguage.googleapis.com"
//! key_env = "GEMINI_API_KEY"
//!
//! [models]
//! pro = "gemini-3-pro-preview"
//! flash = "gemini-3-flash-preview"
//!
//! [consensus]
//! max_rounds = 3
//! ```

use crate::gemini::gateway::{DEFAULT_ENDPOINT, DEFAULT_FLASH_MODEL, DEFAULT_PRO_MODEL};
use rulemaster_application::ConsensusParams;
use serde::{Deserialize, Serialize};

/// Root configuration (`rulemaster.toml`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub models: FileModelsConfig,
    pub consensus: FileConsensusConfig,
}

/// `[api]` section: endpoint and API key source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the generation endpoint
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub key_env: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// `[models]` section: concrete model id per tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model id for the pro tier (Scholar, Auditor, Synthesis)
    pub pro: String,
    /// Model id for the flash tier (Sceptic)
    pub flash: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            pro: DEFAULT_PRO_MODEL.to_string(),
            flash: DEFAULT_FLASH_MODEL.to_string(),
        }
    }
}

/// `[consensus]` section: loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Draft-audit rounds before falling back to synthesis
    pub max_rounds: usize,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        Self { max_rounds: 3 }
    }
}

impl FileConsensusConfig {
    /// Convert into loop parameters
    pub fn params(&self) -> ConsensusParams {
        ConsensusParams::default().with_max_rounds(self.max_rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.api.key_env, "GEMINI_API_KEY");
        assert_eq!(config.models.pro, "gemini-3-pro-preview");
        assert_eq!(config.models.flash, "gemini-3-flash-preview");
        assert_eq!(config.consensus.max_rounds, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[consensus]
max_rounds = 2
"#,
        )
        .unwrap();

        assert_eq!(config.consensus.max_rounds, 2);
        assert_eq!(config.models.pro, "gemini-3-pro-preview");
    }

    #[test]
    fn test_params_conversion() {
        let config: FileConfig = toml::from_str("[consensus]\nmax_rounds = 1\n").unwrap();
        assert_eq!(config.consensus.params().max_rounds, 1);
    }
}

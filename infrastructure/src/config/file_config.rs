//! Configuration file schema
//!
//! Maps `council.toml` onto typed sections. Every field has a default so
//! a missing file or a partial file both work.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// `[gateway]` section
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// `[output]` section
    #[serde(default)]
    pub output: OutputConfig,
}

/// Completion gateway settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Model identifier sent to the completion API
    pub model: String,
    /// Token cap per completion request
    pub max_tokens: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
        }
    }
}

/// Snapshot output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the decision snapshot is written
    pub decision_path: PathBuf,
    /// Where the audit log snapshot is written
    pub audit_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decision_path: PathBuf::from("decision.json"),
            audit_path: PathBuf::from("audit_log.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gateway.model, "claude-sonnet-4-20250514");
        assert_eq!(config.gateway.max_tokens, 1000);
        assert_eq!(config.output.decision_path, PathBuf::from("decision.json"));
        assert_eq!(config.output.audit_path, PathBuf::from("audit_log.json"));
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [gateway]
            model = "claude-haiku-4-5"
            max_tokens = 512
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.model, "claude-haiku-4-5");
        assert_eq!(config.gateway.max_tokens, 512);
        assert_eq!(config.output.decision_path, PathBuf::from("decision.json"));
    }
}

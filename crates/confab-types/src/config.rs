//! Global configuration types for Confab.
//!
//! `GlobalConfig` represents the top-level `config.toml` that points the
//! client at a prediction endpoint.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Confab client.
///
/// Loaded from `{data_dir}/config.toml`. All fields have defaults, so an
/// empty or missing file yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Full URL of the prediction endpoint the client POSTs questions to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
}

fn default_endpoint_url() -> String {
    "http://localhost:3000/api/v1/prediction/default".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(
            config.endpoint_url,
            "http://localhost:3000/api/v1/prediction/default"
        );
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.endpoint_url, GlobalConfig::default().endpoint_url);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let config: GlobalConfig = toml::from_str(
            r#"endpoint_url = "https://chat.example.com/api/v1/prediction/abc123""#,
        )
        .unwrap();
        assert_eq!(
            config.endpoint_url,
            "https://chat.example.com/api/v1/prediction/abc123"
        );
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig {
            endpoint_url: "https://example.org/predict".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.endpoint_url, config.endpoint_url);
    }
}

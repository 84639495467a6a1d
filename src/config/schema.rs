//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Backend addressing and transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API origin, e.g. "https://api.epicrobotics.dev"
    #[serde(default = "default_url")]
    pub url: String,

    /// Base path prepended to every resource path
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Per-request timeout in seconds. None falls back to the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_base_path() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            base_path: default_base_path(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Full request prefix: origin concatenated with the base path
    pub fn base_url(&self) -> String {
        format!("{}{}", self.url, self.base_path)
    }
}

/// Local session persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Where the bearer token is persisted between invocations
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".robolearn")
        .join("token")
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_concatenation() {
        let api = ApiConfig {
            url: "https://api.example.com".to_string(),
            base_path: "/api".to_string(),
            timeout_secs: None,
        };
        assert_eq!(api.base_url(), "https://api.example.com/api");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.url, "http://localhost:5000");
        assert_eq!(config.api.base_path, "/api");
        assert!(config.api.timeout_secs.is_none());
        assert!(config.auth.token_file.ends_with(".robolearn/token"));
    }
}

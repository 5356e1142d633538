//! Application configuration
//!
//! Configuration loaded from `.gh-commit-viewer.toml`, then overridden by
//! environment variables.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// GitHub REST API base URL (GitHub Enterprise: `https://HOST/api/v3`)
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Token forwarded to GitHub as a bearer credential
    #[serde(default)]
    pub github_token: Option<String>,
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    5000
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            github_api_url: default_github_api_url(),
            github_token: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults,
    /// then apply `HOST`, `PORT`, `GITHUB_API_URL` and `GITHUB_TOKEN`.
    pub fn load() -> Self {
        let mut config = Self::from_file();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn from_file() -> Self {
        if let Some(file) = crate::load_config_file() {
            match toml::from_str(&file.content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", file.path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse {}, using defaults: {}",
                        file.path.display(),
                        e
                    );
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Apply overrides from `lookup` (the process environment in `load`)
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            match host.parse() {
                Ok(host) => self.host = host,
                Err(e) => log::warn!("Ignoring invalid HOST '{}': {}", host, e),
            }
        }

        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => log::warn!("Ignoring invalid PORT '{}': {}", port, e),
            }
        }

        if let Some(url) = lookup("GITHUB_API_URL").filter(|u| !u.is_empty()) {
            self.github_api_url = url;
        }

        if let Some(token) = lookup("GITHUB_TOKEN").filter(|t| !t.is_empty()) {
            self.github_token = Some(token);
        }
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert!(config.github_token.is_none());
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            port = 8080
            github_api_url = "https://ghe.example.com/api/v3"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.github_api_url, "https://ghe.example.com/api/v3");
        // Other fields should use defaults
        assert_eq!(config.host, default_host());
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("GITHUB_TOKEN", "ghp_secret"),
        ]));

        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.github_token.as_deref(), Some("ghp_secret"));
        assert_eq!(config.github_api_url, "https://api.github.com");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[("PORT", "not-a-port"), ("GITHUB_TOKEN", "")]));

        assert_eq!(config.port, 5000);
        assert!(config.github_token.is_none());
    }
}

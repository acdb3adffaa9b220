//! # Store connection configuration
//!
//! Where the remote collection lives is external configuration the core
//! treats as opaque. [`StoreConfig`] carries the endpoint base URL and the
//! collection name, with TOML (de)serialisation for on-disk config and a
//! compile-time environment override (`GUESTDESK_STORE_URL`) for the common
//! "point the build at a different backend" case. All fields default so a
//! missing or empty config is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the record store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the records API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Collection name within the store.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8090".to_string()
}

fn default_collection() -> String {
    "guests".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    /// Defaults with the endpoint overridden by `GUESTDESK_STORE_URL` when
    /// that was set at build time.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("GUESTDESK_STORE_URL") {
            config.endpoint = url.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = StoreConfig::from_toml("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.collection, "guests");
    }

    #[test]
    fn toml_round_trip() {
        let config = StoreConfig {
            endpoint: "https://records.example.com".to_string(),
            collection: "guests".to_string(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(StoreConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = StoreConfig::from_toml(r#"endpoint = "https://x.example""#).unwrap();
        assert_eq!(config.endpoint, "https://x.example");
        assert_eq!(config.collection, "guests");
    }
}

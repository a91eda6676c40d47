//! Runtime configuration: optional `toolkit.toml`, then environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::identity::MailboxSpec;

pub const DEFAULT_CONFIG_FILE: &str = "toolkit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub flash: FlashConfig,
    pub storage: StorageConfig,
    pub log_level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    pub mailbox_prefix: String,
    pub email_domain: String,
    pub batch_size: usize,
    pub token_length: usize,
    pub default_cipher: String,
    pub cipher_key: String,
}

/// Copy-confirmation flash durations, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlashConfig {
    pub item: u64,
    pub name: u64,
    pub merged: u64,
    pub selected: u64,
    pub cipher: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file for the persisted cipher. In-memory when unset.
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            flash: FlashConfig::default(),
            storage: StorageConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            mailbox_prefix: "https://mnx-family.com/mailbox/".to_string(),
            email_domain: "mnx-family.com".to_string(),
            batch_size: 5,
            token_length: 8,
            default_cipher: "6tyrqjqk".to_string(),
            cipher_key: "session_password".to_string(),
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            item: 300,
            name: 250,
            merged: 1000,
            selected: 800,
            cipher: 800,
        }
    }
}

impl FlashConfig {
    pub fn item(&self) -> Duration {
        Duration::from_millis(self.item)
    }

    pub fn name(&self) -> Duration {
        Duration::from_millis(self.name)
    }

    pub fn merged(&self) -> Duration {
        Duration::from_millis(self.merged)
    }

    pub fn selected(&self) -> Duration {
        Duration::from_millis(self.selected)
    }

    pub fn cipher(&self) -> Duration {
        Duration::from_millis(self.cipher)
    }
}

impl IdentityConfig {
    pub fn mailbox_spec(&self) -> MailboxSpec {
        MailboxSpec {
            prefix: self.mailbox_prefix.clone(),
            domain: self.email_domain.clone(),
            batch_size: self.batch_size,
            token_length: self.token_length,
        }
    }
}

impl Config {
    /// Loads `.env`, then the file named by `TOOLKIT_CONFIG` (or
    /// `toolkit.toml` when present), then applies `TOOLKIT_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let explicit = env::var("TOOLKIT_CONFIG").ok().map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        info!(
            domain = %config.identity.email_domain,
            persisted = config.storage.path.is_some(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Environment-style overrides; `lookup` returns the value for a key.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup("TOOLKIT_MAILBOX_PREFIX") {
            self.identity.mailbox_prefix = prefix;
        }
        if let Some(domain) = lookup("TOOLKIT_EMAIL_DOMAIN") {
            self.identity.email_domain = domain;
        }
        if let Some(path) = lookup("TOOLKIT_STORE_PATH") {
            self.storage.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("TOOLKIT_LOG") {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let identity = &self.identity;
        if identity.batch_size == 0 {
            return Err(ConfigError::Invalid("identity.batch_size must be at least 1".into()));
        }
        if identity.token_length == 0 {
            return Err(ConfigError::Invalid("identity.token_length must be at least 1".into()));
        }
        if identity.email_domain.trim().is_empty() {
            return Err(ConfigError::Invalid("identity.email_domain is empty".into()));
        }
        if identity.cipher_key.trim().is_empty() {
            return Err(ConfigError::Invalid("identity.cipher_key is empty".into()));
        }
        Url::parse(&identity.mailbox_prefix).map_err(|e| {
            ConfigError::Invalid(format!(
                "identity.mailbox_prefix {:?} is not a URL: {}",
                identity.mailbox_prefix, e
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_the_offline_tool() {
        let config = Config::default();
        assert_eq!(config.identity.batch_size, 5);
        assert_eq!(config.identity.token_length, 8);
        assert_eq!(config.identity.default_cipher, "6tyrqjqk");
        assert_eq!(config.identity.cipher_key, "session_password");
        assert_eq!(config.flash.name(), Duration::from_millis(250));
        assert_eq!(config.flash.merged(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            log_level = "debug"

            [identity]
            email_domain = "example.org"

            [flash]
            item = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.identity.email_domain, "example.org");
        assert_eq!(config.identity.batch_size, 5);
        assert_eq!(config.flash.item, 50);
        assert_eq!(config.flash.cipher, 800);
        assert_eq!(config.storage.path, None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::from_toml_str("identity = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            ("TOOLKIT_EMAIL_DOMAIN", "mail.test"),
            ("TOOLKIT_MAILBOX_PREFIX", "https://mail.test/box/"),
            ("TOOLKIT_STORE_PATH", "/tmp/toolkit.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.identity.email_domain, "mail.test");
        assert_eq!(config.identity.mailbox_prefix, "https://mail.test/box/");
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/toolkit.json")));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn validation_rejects_degenerate_values() {
        let mut config = Config::default();
        config.identity.batch_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.identity.token_length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.identity.email_domain = "  ".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.identity.mailbox_prefix = "not a url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn mailbox_spec_mirrors_identity_section() {
        let spec = Config::default().identity.mailbox_spec();
        assert_eq!(spec.address("abc"), "https://mnx-family.com/mailbox/abc@mnx-family.com");
    }
}

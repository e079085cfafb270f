use crate::error::{Result, ShowroomError};
use crate::model::CurrencyFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ADMIN_PASSWORD: &str = "jo-admin";
const DEFAULT_CURRENCY_SYMBOL: &str = "Rs.";

/// Configuration for showroom, stored in `$SHOWROOM_HOME/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowroomConfig {
    /// Shared admin credential. Plaintext; see [`crate::session`].
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Report updates to unknown ids as errors instead of ignoring them
    #[serde(default)]
    pub strict_updates: bool,

    /// Symbol printed in front of prices (e.g. "Rs.", "$")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            strict_updates: false,
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Keys accepted by `showroom config`.
pub const CONFIG_KEYS: &[&str] = &["admin-password", "strict-updates", "currency-symbol"];

impl ShowroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShowroomError::Io)?;
        let config: ShowroomConfig =
            serde_json::from_str(&content).map_err(ShowroomError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShowroomError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShowroomError::Serialization)?;
        fs::write(config_path, content).map_err(ShowroomError::Io)?;
        Ok(())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            ..CurrencyFormat::default()
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "admin-password" => Ok(self.admin_password.clone()),
            "strict-updates" => Ok(self.strict_updates.to_string()),
            "currency-symbol" => Ok(self.currency_symbol.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "admin-password" => {
                if value.is_empty() {
                    return Err(ShowroomError::Config(
                        "admin-password cannot be empty".to_string(),
                    ));
                }
                self.admin_password = value.to_string();
            }
            "strict-updates" => {
                self.strict_updates = value.parse().map_err(|_| {
                    ShowroomError::Config(format!(
                        "strict-updates expects true or false, got '{}'",
                        value
                    ))
                })?;
            }
            "currency-symbol" => self.currency_symbol = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ShowroomError {
    ShowroomError::Config(format!(
        "Unknown config key '{}'. Known keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

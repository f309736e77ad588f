//! Runtime configuration for the driver.

use std::ffi::OsString;
use std::path::PathBuf;

use stockroom_infra::DEFAULT_INVENTORY_FILE;
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

/// Environment variable overriding the inventory file location.
pub const INVENTORY_FILE_ENV: &str = "INVENTORY_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Defaults, with the inventory path taken from `INVENTORY_FILE` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::default();
        match lookup(INVENTORY_FILE_ENV) {
            Some(path) if !path.is_empty() => config.inventory_path = PathBuf::from(path),
            Some(_) => {
                tracing::warn!("{INVENTORY_FILE_ENV} is empty; using {DEFAULT_INVENTORY_FILE}");
            }
            None => {}
        }
        config
    }

    pub fn with_inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inventory_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inventory_json() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn env_overrides_path() {
        let config = AppConfig::from_lookup(|key| {
            (key == INVENTORY_FILE_ENV).then(|| OsString::from("/var/lib/stock.json"))
        });
        assert_eq!(config.inventory_path, PathBuf::from("/var/lib/stock.json"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let config = AppConfig::from_lookup(|_| Some(OsString::new()));
        assert_eq!(config, AppConfig::default());
    }
}

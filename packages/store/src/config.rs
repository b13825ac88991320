//! # Site configuration: `storyswap.toml`
//!
//! Tunables for storage keys, listing rules and the toast surface. The desktop
//! build reads the file from its data directory; the web build uses the
//! defaults.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! favorites_key = "storyswap-favorites"
//! user_key = "storyswap-user"
//!
//! [listing]
//! min_story_chars = 150
//! max_photos = 8
//!
//! [notifications]
//! visible_limit = 3
//! dismiss_after_secs = 5
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`SiteConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration stored in `storyswap.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Keys under which state is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
}

fn default_favorites_key() -> String {
    "storyswap-favorites".to_string()
}

fn default_user_key() -> String {
    "storyswap-user".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            favorites_key: default_favorites_key(),
            user_key: default_user_key(),
        }
    }
}

/// Validation rules for new listings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Minimum story length in UTF-16 code units.
    #[serde(default = "default_min_story_chars")]
    pub min_story_chars: usize,
    /// Photos beyond this count are dropped from a payload.
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,
}

fn default_min_story_chars() -> usize {
    150
}

fn default_max_photos() -> usize {
    8
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            min_story_chars: default_min_story_chars(),
            max_photos: default_max_photos(),
        }
    }
}

/// Toast surface behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_visible_limit")]
    pub visible_limit: usize,
    /// 0 keeps toasts until dismissed.
    #[serde(default = "default_dismiss_after_secs")]
    pub dismiss_after_secs: u64,
}

fn default_visible_limit() -> usize {
    3
}

fn default_dismiss_after_secs() -> u64 {
    5
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_limit: default_visible_limit(),
            dismiss_after_secs: default_dismiss_after_secs(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "storyswap.toml"
    }

    /// Builder method to override the minimum story length.
    pub fn with_min_story_chars(mut self, chars: usize) -> Self {
        self.listing.min_story_chars = chars;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load `storyswap.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.storage.favorites_key, "storyswap-favorites");
        assert_eq!(config.storage.user_key, "storyswap-user");
        assert_eq!(config.listing.min_story_chars, 150);
        assert_eq!(config.listing.max_photos, 8);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_toml("[listing]\nmax_photos = 4\n").unwrap();
        assert_eq!(config.listing.max_photos, 4);
        assert_eq!(config.listing.min_story_chars, 150);
        assert_eq!(config.notifications.visible_limit, 3);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SiteConfig::default().with_min_story_chars(200);
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(matches!(
            SiteConfig::from_toml("[listing]\nmax_photos = \"many\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());

        std::fs::write(dir.path().join("storyswap.toml"), "[notifications]\ndismiss_after_secs = 0\n").unwrap();
        let config = SiteConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.notifications.dismiss_after_secs, 0);
    }
}

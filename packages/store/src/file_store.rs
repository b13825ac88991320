//! # Filesystem-backed key-value storage
//!
//! [`FileStorage`] is the [`KeyValueStore`] used on desktop. Each key is a
//! single file holding the raw JSON value:
//!
//! ```text
//! <base_dir>/
//! ├── storyswap-favorites.json
//! └── storyswap-user.json
//! ```
//!
//! Use `dirs::data_dir()` joined with `storyswap` for a platform-appropriate
//! base (`~/.local/share/storyswap/` on Linux,
//! `~/Library/Application Support/storyswap/` on macOS).

use std::path::PathBuf;

use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.value_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.value_path(key), value) {
            tracing::warn!("Failed to write `{}`: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let path = self.value_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!("Failed to remove `{}`: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Favorites;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storyswap"));

        storage.set("storyswap-favorites", "[2,4]");
        assert_eq!(storage.get("storyswap-favorites").as_deref(), Some("[2,4]"));

        storage.remove("storyswap-favorites");
        assert!(storage.get("storyswap-favorites").is_none());

        // Removing a missing key is a no-op
        storage.remove("storyswap-favorites");
    }

    #[test]
    fn test_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut favorites = Favorites::load(FileStorage::new(dir.path().to_path_buf()), "favs");
        favorites.toggle(3);
        favorites.toggle(1);

        // Re-open from the same directory
        let reopened = Favorites::load(FileStorage::new(dir.path().to_path_buf()), "favs");
        assert_eq!(reopened.ids(), &[3, 1]);
    }
}

//! Shared storage constructor for all platforms.
//!
//! Returns the [`api::Storage`] the [`crate::MarketProvider`] restores from:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorage`
//! - **Desktop** (native): one JSON file per key via [`store::FileStorage`]
//! - anything else: [`store::MemoryStorage`], nothing survives a reload

use std::rc::Rc;

use store::SiteConfig;

/// Create the platform-appropriate durable storage.
pub fn make_storage() -> api::Storage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileStorage::new(data_dir()))
    }
}

/// `<data_dir>/storyswap/`, or `./storyswap/` when the platform has none.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("storyswap")
}

/// Site configuration. Native builds read `storyswap.toml` from the data
/// directory; an unreadable file falls back to the defaults.
pub fn load_config() -> SiteConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = data_dir();
        match SiteConfig::load_from_dir(&dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", SiteConfig::filename(), e);
                SiteConfig::default()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        SiteConfig::default()
    }
}

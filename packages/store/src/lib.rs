pub mod config;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::SiteConfig;
pub use error::{ConfigError, PersistError};
pub use favorites::Favorites;
pub use listing::{DropZone, ListingDraft, ListingError, ListingForm};
pub use models::{Category, Condition, Item, ItemId, PhotoRef, User};
pub use notify::{Notification, NotificationQueue, Notifier, Severity};
pub use session::{Session, SessionStore};
pub use storage::KeyValueStore;

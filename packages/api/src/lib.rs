//! # API crate: service seams and the application state container
//!
//! Everything the StorySwap views call lives behind this crate, so that a
//! real backend can later replace the mocks without touching the UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthProvider`] seam and the [`MockAuth`] implementation |
//! | [`catalog`] | [`CatalogSource`] seam, the seed [`StaticCatalog`], category tiles |
//! | [`browse`] | Detail selection, search dialog and auth dialog state |
//! | [`marketplace`] | [`Marketplace`], the single container the UI holds in a signal |

pub mod auth;
pub mod browse;
pub mod catalog;
pub mod marketplace;

pub use auth::{AuthError, AuthProvider, MockAuth};
pub use browse::{AuthDialog, BrowseState};
pub use catalog::{category_summaries, CatalogSource, CategorySummary, StaticCatalog};
pub use marketplace::{photo_noun, Marketplace, Storage};

pub use store::{Category, Condition, Item, ItemId, Notification, PhotoRef, Severity, User};

//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::FaHeart as FaHeartOutline;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{load_config, make_storage};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::data_dir;

pub mod views;
pub use views::HomeView;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod market;
pub use market::{use_market, MarketProvider};

pub mod scroll;
pub use scroll::scroll_to_section;

mod toast;
pub use toast::ToastStack;

mod avatar;
pub use avatar::Avatar;

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod categories;
pub use categories::CategoryGrid;

mod featured;
pub use featured::{FavoriteButton, FeaturedItems, ItemCard};

mod item_detail;
pub use item_detail::ItemDetailDialog;

mod sell_item;
pub use sell_item::SellItemSection;

mod search_dialog;
pub use search_dialog::SearchDialog;

mod auth;
pub use auth::{SignInDialog, SignUpDialog};

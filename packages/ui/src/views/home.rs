use dioxus::prelude::*;

use crate::{
    CategoryGrid, FeaturedItems, Header, Hero, ItemDetailDialog, SearchDialog, SellItemSection,
    SignInDialog, SignUpDialog, ToastStack,
};

/// The single marketplace page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            class: "page",
            Header {}
            main {
                Hero {}
                CategoryGrid {}
                FeaturedItems {}
                SellItemSection {}
            }
            footer {
                class: "site-footer",
                p { "StorySwap. Every item has a story worth continuing." }
            }
            ItemDetailDialog {}
            SearchDialog {}
            SignInDialog {}
            SignUpDialog {}
            ToastStack {}
        }
    }
}

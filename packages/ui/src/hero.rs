use dioxus::prelude::*;

use crate::icons::{FaHeart, FaMagnifyingGlass, FaRecycle, FaUsers};
use crate::scroll::{FEATURED_ITEMS, SELL_ITEM};
use crate::{scroll_to_section, Icon};

/// Landing banner with the two calls to action and community stats.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-inner",
                span {
                    class: "badge badge-secondary hero-badge",
                    Icon { icon: FaHeart, width: 16, height: 16, class: "accent" }
                    "Where Stories Find New Homes Since 2024"
                }
                h1 {
                    class: "hero-title",
                    "Every Item Has a "
                    span { class: "hero-title-accent", "Beautiful Story" }
                }
                p {
                    class: "hero-lead",
                    "Transform forgotten treasures into cherished finds. Connect hearts through stories, not just shopping. Because every pre-loved item deserves a new chapter."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| scroll_to_section(FEATURED_ITEMS),
                        Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
                        "Discover Amazing Stories"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        onclick: move |_| scroll_to_section(SELL_ITEM),
                        Icon { icon: FaHeart, width: 20, height: 20 }
                        "Share Your Treasure's Story"
                    }
                }
                div {
                    class: "hero-stats",
                    div {
                        class: "hero-stat",
                        div { class: "hero-stat-value", "15,420" }
                        div {
                            class: "hero-stat-label",
                            Icon { icon: FaHeart, width: 14, height: 14 }
                            "Stories Shared"
                        }
                    }
                    div {
                        class: "hero-stat",
                        div { class: "hero-stat-value accent", "2,847" }
                        div {
                            class: "hero-stat-label",
                            Icon { icon: FaRecycle, width: 14, height: 14 }
                            "Items Saved from Landfills"
                        }
                    }
                    div {
                        class: "hero-stat",
                        div { class: "hero-stat-value", "8,392" }
                        div {
                            class: "hero-stat-label",
                            Icon { icon: FaUsers, width: 14, height: 14 }
                            "Community Members"
                        }
                    }
                }
            }
        }
    }
}

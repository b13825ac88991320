//! Sticky site header: brand, section navigation, search, favorites badge
//! and the account menu.

use dioxus::prelude::*;

use crate::icons::{FaHeart, FaMagnifyingGlass, FaPlus, FaRightFromBracket, FaStar};
use crate::scroll::{CATEGORIES, FEATURED_ITEMS, SELL_ITEM};
use crate::{scroll_to_section, use_market, Avatar, Icon};

#[component]
pub fn Header() -> Element {
    let mut market = use_market();
    let mut menu_open = use_signal(|| false);

    let favorites = market.read().favorites_count();
    let user = market.read().user().cloned();

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",

                div {
                    class: "brand",
                    span {
                        class: "brand-mark",
                        Icon { icon: FaHeart, width: 20, height: 20 }
                    }
                    span { class: "brand-name", "StorySwap" }
                }

                nav {
                    class: "site-nav",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll_to_section(CATEGORIES),
                        "Browse"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll_to_section(FEATURED_ITEMS),
                        "Discover"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll_to_section(SELL_ITEM),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Sell"
                    }
                }

                div {
                    class: "header-actions",
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Search stories",
                        onclick: move |_| market.write().set_search_open(true),
                        Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                    }

                    span {
                        class: "btn btn-ghost btn-icon favorites-indicator",
                        title: "Favorites",
                        Icon { icon: FaHeart, width: 18, height: 18 }
                        if favorites > 0 {
                            span { class: "badge badge-count", "{favorites}" }
                        }
                    }

                    if let Some(user) = user {
                        div {
                            class: "user-menu",
                            button {
                                class: "btn btn-ghost user-menu-trigger",
                                onclick: move |_| menu_open.set(!menu_open()),
                                Avatar {
                                    src: user.avatar.clone(),
                                    fallback: user.initial(),
                                }
                                span { class: "user-menu-label", "{user.name}" }
                            }
                            if menu_open() {
                                div {
                                    class: "user-menu-content",
                                    div {
                                        class: "user-menu-profile",
                                        p { class: "user-menu-name", "{user.name}" }
                                        p { class: "muted", "{user.email}" }
                                        p {
                                            class: "trust-score",
                                            Icon { icon: FaStar, width: 12, height: 12, class: "star" }
                                            "{user.trust_score} Trust Score"
                                        }
                                    }
                                    button {
                                        class: "user-menu-item",
                                        onclick: move |_| {
                                            menu_open.set(false);
                                            market.write().sign_out();
                                        },
                                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                        "Sign Out"
                                    }
                                }
                            }
                        }
                    } else {
                        div {
                            class: "auth-buttons",
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| market.write().open_sign_in(),
                                "Sign In"
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| market.write().open_sign_up(),
                                "Join"
                            }
                        }
                    }
                }
            }
        }
    }
}

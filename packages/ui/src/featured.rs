//! Featured listings grid and its cards.

use api::{Item, ItemId};
use dioxus::prelude::*;

use crate::icons::{FaCalendar, FaEye, FaHeart, FaHeartOutline, FaLocationDot, FaStar};
use crate::scroll::FEATURED_ITEMS;
use crate::{use_market, Avatar, Icon};

#[component]
pub fn FeaturedItems() -> Element {
    let market = use_market();
    let items = market.read().items();

    rsx! {
        section {
            id: FEATURED_ITEMS,
            class: "section section-subtle",
            div {
                class: "section-inner",
                div {
                    class: "section-heading",
                    span {
                        class: "badge badge-secondary",
                        Icon { icon: FaStar, width: 14, height: 14 }
                        "Story Spotlight"
                    }
                    h2 { "Treasures with Heartfelt Stories" }
                    p { class: "muted", "Each item carries memories, love, and a story waiting to continue" }
                }
                div {
                    class: "item-grid",
                    for item in items {
                        ItemCard { key: "{item.id}", item }
                    }
                }
            }
        }
    }
}

/// Browse card: image, favorite toggle, excerpt, seller and "Read Story".
#[component]
pub fn ItemCard(item: Item) -> Element {
    let mut market = use_market();
    let id = item.id;

    rsx! {
        div {
            class: "card item-card",
            div {
                class: "item-card-media",
                img { src: "{item.image}", alt: "{item.title}" }
                FavoriteButton { item_id: id, class: "item-card-favorite" }
                span { class: "badge badge-secondary item-card-category", "{item.category.label()}" }
            }
            div {
                class: "item-card-body",
                div {
                    class: "item-card-heading",
                    h3 { "{item.title}" }
                    span { class: "price", "{item.display_price()}" }
                }
                p { class: "muted small line-clamp-2", "{item.story}" }
                div {
                    class: "item-meta",
                    span {
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        "{item.location}"
                    }
                    span { "•" }
                    span {
                        Icon { icon: FaEye, width: 12, height: 12 }
                        "{item.views}"
                    }
                    span { "•" }
                    span {
                        Icon { icon: FaCalendar, width: 12, height: 12 }
                        "{item.listed_date}"
                    }
                }
                div {
                    class: "item-card-footer",
                    div {
                        class: "seller",
                        Avatar {
                            src: item.seller_image.clone(),
                            fallback: item.seller_initial(),
                            class: "avatar avatar-sm",
                        }
                        div {
                            p { class: "seller-name", "{item.seller_name}" }
                            p {
                                class: "rating",
                                Icon { icon: FaStar, width: 12, height: 12, class: "star" }
                                "{item.seller_rating}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| {
                            market.write().select_item(id);
                        },
                        "Read Story"
                    }
                }
            }
        }
    }
}

/// Heart toggle. Filled when the item is a favorite.
#[component]
pub fn FavoriteButton(
    item_id: ItemId,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut market = use_market();
    let favorite = market.read().is_favorite(item_id);

    rsx! {
        button {
            class: "btn btn-ghost btn-icon favorite-button {class}",
            title: if favorite { "Remove from favorites" } else { "Add to favorites" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                market.write().toggle_favorite(item_id);
            },
            if favorite {
                Icon { icon: FaHeart, width: 16, height: 16, class: "heart-filled" }
            } else {
                Icon { icon: FaHeartOutline, width: 16, height: 16 }
            }
        }
    }
}

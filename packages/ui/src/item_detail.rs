use dioxus::prelude::*;

use crate::icons::{FaCalendar, FaEye, FaHeart, FaLocationDot, FaMessage, FaStar};
use crate::views::ModalOverlay;
use crate::{use_market, Avatar, FavoriteButton, Icon};

/// Detail dialog for the selected listing. Renders nothing when no item is
/// selected.
#[component]
pub fn ItemDetailDialog() -> Element {
    let mut market = use_market();
    let Some(item) = market.read().selected_item() else {
        return rsx! {};
    };

    let id = item.id;
    let contact = item.clone();

    rsx! {
        ModalOverlay {
            wide: true,
            on_close: move |_| market.write().close_item(),
            div {
                class: "item-detail",
                div {
                    class: "item-detail-media",
                    img { src: "{item.image}", alt: "{item.title}" }
                    div {
                        class: "item-detail-badges",
                        span { class: "badge badge-secondary", "{item.category.label()}" }
                        span { class: "badge badge-outline", "{item.condition.label()}" }
                    }
                }
                div {
                    class: "item-detail-body",
                    div {
                        class: "item-card-heading",
                        h2 { "{item.title}" }
                        span { class: "price price-lg", "{item.display_price()}" }
                    }
                    div {
                        class: "item-meta",
                        span {
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            "{item.location}"
                        }
                        span {
                            Icon { icon: FaEye, width: 14, height: 14 }
                            "{item.views} views"
                        }
                        span {
                            Icon { icon: FaCalendar, width: 14, height: 14 }
                            "Listed {item.listed_date}"
                        }
                    }
                    div {
                        class: "story-block",
                        h3 {
                            Icon { icon: FaHeart, width: 16, height: 16, class: "accent" }
                            "The Story Behind This Treasure"
                        }
                        p { "{item.full_story}" }
                    }
                    div {
                        class: "seller card",
                        Avatar {
                            src: item.seller_image.clone(),
                            fallback: item.seller_initial(),
                        }
                        div {
                            p { class: "seller-name", "{item.seller_name}" }
                            p {
                                class: "rating",
                                Icon { icon: FaStar, width: 12, height: 12, class: "star" }
                                "{item.seller_rating} seller rating"
                            }
                        }
                    }
                    div {
                        class: "item-detail-actions",
                        button {
                            class: "btn btn-primary btn-grow",
                            onclick: move |_| market.write().contact_seller(&contact),
                            Icon { icon: FaMessage, width: 16, height: 16 }
                            "Contact Seller"
                        }
                        FavoriteButton { item_id: id, class: "btn-outline" }
                    }
                }
            }
        }
    }
}

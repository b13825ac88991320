use api::{category_summaries, Category};
use dioxus::prelude::*;

use crate::icons::{FaBagShopping, FaBookOpen, FaGem, FaHouse, FaMobileScreen, FaPalette, FaShirt};
use crate::scroll::{CATEGORIES, FEATURED_ITEMS};
use crate::{scroll_to_section, Icon};

/// Grid of category tiles. Clicking a tile jumps to the featured listings.
#[component]
pub fn CategoryGrid() -> Element {
    let summaries = category_summaries();

    rsx! {
        section {
            id: CATEGORIES,
            class: "section",
            div {
                class: "section-inner",
                div {
                    class: "section-heading",
                    span {
                        class: "badge badge-secondary",
                        Icon { icon: FaBagShopping, width: 14, height: 14 }
                        "Browse by Category"
                    }
                    h2 { "Find Stories That Speak to You" }
                    p { class: "muted", "Each category holds treasures with unique tales waiting to be discovered" }
                }
                div {
                    class: "category-grid",
                    for summary in summaries {
                        div {
                            key: "{summary.category.label()}",
                            class: "card category-card",
                            onclick: move |_| scroll_to_section(FEATURED_ITEMS),
                            div {
                                class: "category-icon {summary.color}",
                                {category_icon(summary.category)}
                            }
                            h3 { "{summary.category.label()}" }
                            span { class: "badge badge-outline", "{summary.count} items" }
                            p { class: "muted small", "Stories waiting to find their next chapter" }
                        }
                    }
                }
            }
        }
    }
}

fn category_icon(category: Category) -> Element {
    match category {
        Category::BooksLiterature => rsx! { Icon { icon: FaBookOpen, width: 32, height: 32 } },
        Category::VintageFashion => rsx! { Icon { icon: FaShirt, width: 32, height: 32 } },
        Category::Electronics => rsx! { Icon { icon: FaMobileScreen, width: 32, height: 32 } },
        Category::HomeDecor => rsx! { Icon { icon: FaHouse, width: 32, height: 32 } },
        Category::Collectibles => rsx! { Icon { icon: FaGem, width: 32, height: 32 } },
        Category::Handmade => rsx! { Icon { icon: FaPalette, width: 32, height: 32 } },
    }
}

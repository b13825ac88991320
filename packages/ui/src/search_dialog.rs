use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::scroll::FEATURED_ITEMS;
use crate::views::ModalOverlay;
use crate::{scroll_to_section, use_market, Icon};

/// Free-text search. Submitting echoes the query and brings the featured
/// listings into view; nothing is filtered.
#[component]
pub fn SearchDialog() -> Element {
    let mut market = use_market();
    if !market.read().is_search_open() {
        return rsx! {};
    }
    let query = market.read().search_query().to_string();

    rsx! {
        ModalOverlay {
            on_close: move |_| market.write().set_search_open(false),
            div {
                class: "dialog",
                h2 {
                    class: "dialog-title",
                    Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                    "Search Stories"
                }
                p { class: "muted small", "Find treasures by story keywords, category, or location" }
                form {
                    class: "dialog-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let submitted = market.write().submit_search();
                        if submitted.is_some() {
                            scroll_to_section(FEATURED_ITEMS);
                        }
                    },
                    input {
                        class: "input",
                        placeholder: "Search for items, stories, or sellers...",
                        autofocus: true,
                        value: "{query}",
                        oninput: move |evt: FormEvent| market.write().set_search_query(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        "Search Stories"
                    }
                }
            }
        }
    }
}

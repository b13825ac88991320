//! Section anchors on the home page.

use dioxus::prelude::*;

pub const CATEGORIES: &str = "categories";
pub const FEATURED_ITEMS: &str = "featured-items";
pub const SELL_ITEM: &str = "sell-item";

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    tracing::debug!(section = id, "Scrolling to section");
    let js = format!(
        "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }});"
    );
    document::eval(&js);
}

//! Application state context.

use api::Marketplace;
use dioxus::prelude::*;

use crate::{load_config, make_storage};

/// Get the shared [`Marketplace`].
/// Every view reads and mutates client state through this one signal.
pub fn use_market() -> Signal<Marketplace> {
    use_context::<Signal<Marketplace>>()
}

/// Provider component that restores client state from durable storage.
/// Wrap your app with this component before rendering any view.
#[component]
pub fn MarketProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Marketplace::new(make_storage(), load_config())));

    rsx! {
        {children}
    }
}

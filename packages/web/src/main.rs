use dioxus::prelude::*;

use ui::{HomeView, MarketProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting StorySwap (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "StorySwap" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        MarketProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Unknown paths land back on the marketplace.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}

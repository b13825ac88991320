use dioxus::prelude::*;

use ui::{HomeView, MarketProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(dir = %ui::data_dir().display(), "Starting StorySwap (desktop)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
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

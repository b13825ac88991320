use dioxus::prelude::*;

/// Round avatar image with a letter fallback when no image is set.
#[component]
pub fn Avatar(
    src: String,
    fallback: String,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    rsx! {
        span {
            class: "{class}",
            if src.is_empty() {
                span { class: "avatar-fallback", "{fallback}" }
            } else {
                img { class: "avatar-image", src: "{src}", alt: "{fallback}" }
            }
        }
    }
}

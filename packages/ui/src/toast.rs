//! Toast stack rendering the marketplace notification queue.

use std::time::Duration;

use api::{Notification, Severity};
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::{use_market, Icon};

/// Bottom-right stack of the newest notifications.
#[component]
pub fn ToastStack() -> Element {
    let market = use_market();
    let toasts = market.read().visible_notifications().to_vec();
    let dismiss_after_secs = market.read().config().notifications.dismiss_after_secs;

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            for toast in toasts {
                ToastItem {
                    key: "{toast.id}",
                    notification: toast.clone(),
                    dismiss_after_secs,
                }
            }
        }
    }
}

#[component]
fn ToastItem(notification: Notification, dismiss_after_secs: u64) -> Element {
    let mut market = use_market();
    let id = notification.id;

    // Start the auto-dismiss timer once, when the toast mounts
    use_hook(move || {
        if dismiss_after_secs > 0 {
            spawn(async move {
                sleep(Duration::from_secs(dismiss_after_secs)).await;
                market.write().dismiss_notification(id);
            });
        }
    });

    let class = match notification.severity {
        Severity::Destructive => "toast toast--destructive",
        Severity::Default => "toast",
    };

    rsx! {
        div {
            class,
            div {
                class: "toast-text",
                p { class: "toast-title", "{notification.title}" }
                if !notification.body.is_empty() {
                    p { class: "toast-body", "{notification.body}" }
                }
            }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| market.write().dismiss_notification(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

//! Sign-in and sign-up dialogs.
//!
//! Field values live in local signals and are handed to the marketplace on
//! submit. A rejected attempt keeps the dialog open with its input intact.

use api::AuthDialog;
use dioxus::prelude::*;

use crate::use_market;
use crate::views::ModalOverlay;

#[component]
pub fn SignInDialog() -> Element {
    let mut market = use_market();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    if market.read().auth_dialog() != AuthDialog::SignIn {
        return rsx! {};
    }

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        if market.write().sign_in(&email(), &password()).is_ok() {
            email.set(String::new());
            password.set(String::new());
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| market.write().close_auth_dialog(),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "Welcome Back to StorySwap" }
                p { class: "muted small", "Sign in to save favorites and share your own stories" }
                form {
                    class: "dialog-form",
                    onsubmit: handle_sign_in,
                    div {
                        class: "field",
                        label { class: "field-label", r#for: "sign-in-email", "Email" }
                        input {
                            id: "sign-in-email",
                            class: "input",
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { class: "field-label", r#for: "sign-in-password", "Password" }
                        input {
                            id: "sign-in-password",
                            class: "input",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary btn-block", r#type: "submit", "Sign In" }
                    p {
                        class: "muted small center",
                        "Don't have an account? "
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| market.write().switch_auth_dialog(),
                            "Join StorySwap"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SignUpDialog() -> Element {
    let mut market = use_market();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    if market.read().auth_dialog() != AuthDialog::SignUp {
        return rsx! {};
    }

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        if market.write().sign_up(&name(), &email(), &password()).is_ok() {
            name.set(String::new());
            email.set(String::new());
            password.set(String::new());
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| market.write().close_auth_dialog(),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "Join the StorySwap Community" }
                p { class: "muted small", "Start sharing and discovering meaningful stories" }
                form {
                    class: "dialog-form",
                    onsubmit: handle_sign_up,
                    div {
                        class: "field",
                        label { class: "field-label", r#for: "sign-up-name", "Full Name" }
                        input {
                            id: "sign-up-name",
                            class: "input",
                            required: true,
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { class: "field-label", r#for: "sign-up-email", "Email" }
                        input {
                            id: "sign-up-email",
                            class: "input",
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { class: "field-label", r#for: "sign-up-password", "Password" }
                        input {
                            id: "sign-up-password",
                            class: "input",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary btn-block", r#type: "submit", "Join StorySwap" }
                    p {
                        class: "muted small center",
                        "Already have an account? "
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| market.write().switch_auth_dialog(),
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}

use api::catalog;
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use ui::{use_auth, Link};

use super::AuthCard;

#[component]
pub fn ForgotPassword() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(String::new());
            loading.set(true);
            match catalog::forgot_password(auth.backend(), &email()).await {
                Ok(()) => sent.set(true),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    };

    rsx! {
        AuthCard {
            title: "Forgot your password?",
            footer: rsx! {
                p {
                    "Back to "
                    Link { to: "/login", "sign in" }
                }
            },

            if sent() {
                Alert {
                    kind: AlertKind::Success,
                    message: "If an account exists for {email()}, a reset link is on its way.",
                }
            } else {
                form { onsubmit: handle_submit,
                    p { "Enter your email and we will send you a link to reset your password." }
                    Alert { message: error() }
                    Input {
                        id: "forgot-email",
                        label: "Email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        loading: loading(),
                        "Send"
                    }
                }
            }
        }
    }
}

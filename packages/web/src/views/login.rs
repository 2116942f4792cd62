//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Alert, Button, ButtonVariant, Input};
use ui::{use_auth, Link};

use super::AuthCard;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Once the session holds a user, the guests-only guard moves on to the dashboard.
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(String::new());

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set("Please enter your email and password".to_string());
                return;
            }

            loading.set(true);
            if let Err(err) = auth.login(&e, &p).await {
                loading.set(false);
                error.set(err.to_string());
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Sign in to your account",
            footer: rsx! {
                p {
                    Link { to: "/forgot-password", "Forgot your password?" }
                }
                p {
                    "No account yet? "
                    Link { to: "/register", "Sign up" }
                }
            },

            form { onsubmit: handle_login,
                Alert { message: error() }

                Input {
                    id: "login-email",
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    required: true,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    id: "login-password",
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    required: true,
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    loading: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

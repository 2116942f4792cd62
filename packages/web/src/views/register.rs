//! Registration page view with name/email/password form.

use dioxus::prelude::*;
use ui::components::{Alert, Button, ButtonVariant, Input};
use ui::{use_auth, Link};

use super::AuthCard;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut accepted = use_signal(|| false);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(String::new());

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set("Name is required".to_string());
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set("Please enter a valid email".to_string());
                return;
            }
            if p.len() < MIN_PASSWORD_LEN {
                error.set(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
                return;
            }
            if !accepted() {
                error.set("Please accept the terms and conditions".to_string());
                return;
            }

            loading.set(true);
            if let Err(err) = auth.register(&n, &e, &p).await {
                loading.set(false);
                error.set(err.to_string());
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Create an account",
            footer: rsx! {
                p {
                    "Already have an account? "
                    Link { to: "/login", "Sign in" }
                }
            },

            form { onsubmit: handle_register,
                Alert { message: error() }

                Input {
                    id: "register-name",
                    label: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    id: "register-email",
                    label: "Email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    id: "register-password",
                    label: "Password",
                    r#type: "password",
                    placeholder: "At least {MIN_PASSWORD_LEN} characters",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { class: "form-field",
                    input {
                        r#type: "checkbox",
                        checked: accepted(),
                        onchange: move |evt: FormEvent| accepted.set(evt.checked()),
                    }
                    " I accept the terms and conditions"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    loading: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }
        }
    }
}

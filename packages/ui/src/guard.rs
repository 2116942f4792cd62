use api::{Guard, Outcome, Policy};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Spinner;
use crate::navigation::Redirect;

/// Render `children` only when `policy` allows it for the current session.
#[component]
pub fn Guarded(policy: Policy, children: Element) -> Element {
    let auth = use_auth();

    match Guard::default().evaluate(&policy, &auth.session()) {
        Outcome::Render => rsx! {
            {children}
        },
        Outcome::Waiting => rsx! {
            div { class: "guard-waiting",
                Spinner { label: "Loading..." }
            }
        },
        Outcome::Blank => rsx! {},
        Outcome::Redirect(to) => rsx! {
            Redirect { to: to.to_string() }
        },
    }
}

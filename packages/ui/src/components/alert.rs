use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

/// A one-line message box. Renders nothing for an empty message.
#[component]
pub fn Alert(#[props(default)] kind: AlertKind, message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    let class = match kind {
        AlertKind::Error => "alert alert-error",
        AlertKind::Success => "alert alert-success",
        AlertKind::Info => "alert alert-info",
    };
    rsx! {
        div { class, role: "alert", "{message}" }
    }
}

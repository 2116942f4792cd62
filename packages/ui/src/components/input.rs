use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{html_for}", {children} }
    }
}

/// A labelled text input.
#[component]
pub fn Input(
    id: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-field {class}",
            if !label.is_empty() {
                Label { html_for: id.clone(), "{label}" }
            }
            input {
                id: "{id}",
                class: "form-input",
                r#type: r#type.clone(),
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

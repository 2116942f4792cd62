//! Hotel creation form.
//!
//! Contact details are folded into the description by [`api::HotelDraft`];
//! the picture is read in the browser and sent as a multipart part.

use api::{catalog, Currency, HotelDraft, ImageUpload};
use dioxus::prelude::*;
use ui::components::{Alert, Button, ButtonVariant, Input, Label};
use ui::{use_auth, use_router};

#[component]
pub fn CreateHotel() -> Element {
    let auth = use_auth();
    let nav = use_router();
    let mut draft = use_signal(HotelDraft::default);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let on_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        for file_name in engine.files() {
            match engine.read_file(&file_name).await {
                Some(bytes) => draft.write().image = Some(ImageUpload::new(&file_name, bytes)),
                None => tracing::warn!("Could not read {file_name}"),
            }
        }
    };

    let handle_submit = {
        let nav = nav.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let auth = auth.clone();
            let nav = nav.clone();
            spawn(async move {
                error.set(String::new());
                loading.set(true);
                let token = auth.token();
                let current = draft();
                match catalog::create_hotel(auth.backend(), token.as_deref(), &current).await {
                    Ok(_) => nav.navigate("/hotels"),
                    // The members-only guard takes over once the session is gone.
                    Err(e) if e.is_unauthorized() => auth.invalidate(),
                    Err(e) => {
                        loading.set(false);
                        error.set(e.to_string());
                    }
                }
            });
        }
    };

    let on_cancel = move |_: MouseEvent| nav.navigate("/hotels");

    let preview = draft
        .read()
        .image
        .as_ref()
        .map(|image| (image.file_name.clone(), image.data_url()));

    rsx! {
        div { class: "panel",
            form { onsubmit: handle_submit,
                Alert { message: error() }

                div { class: "form-grid",
                    Input {
                        id: "hotel-name",
                        label: "Hotel name",
                        value: draft.read().name.clone(),
                        placeholder: "CAP Marniane",
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                    Input {
                        id: "hotel-address",
                        label: "Address",
                        value: draft.read().address.clone(),
                        placeholder: "Les îles du saloum, Mar Lodj",
                        oninput: move |evt: FormEvent| draft.write().address = evt.value(),
                    }
                    Input {
                        id: "hotel-email",
                        label: "Email",
                        r#type: "email",
                        value: draft.read().email.clone(),
                        placeholder: "information@gmail.com",
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                    Input {
                        id: "hotel-phone",
                        label: "Phone number",
                        r#type: "tel",
                        value: draft.read().phone.clone(),
                        placeholder: "+221 77 777 77 77",
                        oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                    }
                    Input {
                        id: "hotel-price",
                        label: "Price per night",
                        r#type: "number",
                        value: draft.read().price.clone(),
                        placeholder: "25000",
                        oninput: move |evt: FormEvent| draft.write().price = evt.value(),
                    }
                    div { class: "form-field",
                        Label { html_for: "hotel-currency", "Currency" }
                        select {
                            id: "hotel-currency",
                            class: "form-select",
                            value: "{draft.read().currency.code()}",
                            onchange: move |evt: FormEvent| {
                                match evt.value().parse::<Currency>() {
                                    Ok(currency) => draft.write().currency = currency,
                                    Err(e) => tracing::warn!("{e}"),
                                }
                            },
                            for currency in Currency::ALL {
                                option { value: currency.code(), "{currency.label()}" }
                            }
                        }
                    }
                }

                div { class: "image-drop",
                    Label { html_for: "hotel-image", "Add a picture" }
                    input {
                        id: "hotel-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_image,
                    }
                    if let Some((name, src)) = preview {
                        img { class: "image-preview", src: "{src}", alt: "{name}" }
                        p { class: "stat-label", "{name}" }
                    }
                }

                div { class: "form-actions",
                    Button { variant: ButtonVariant::Ghost, onclick: on_cancel, "Cancel" }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        loading: loading(),
                        "Save"
                    }
                }
            }
        }
    }
}

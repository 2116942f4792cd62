//! Hotel list with a search box bound to `?search=`.
//!
//! The full list is fetched once per visit and filtered locally on every
//! keystroke, so back/forward restores earlier searches without a request.

use api::{catalog, Hotel};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Spinner};
use ui::icons::FaPlus;
use ui::{use_auth, use_router, Icon};

const SEARCH_KEY: &str = "search";

#[component]
fn HotelCard(hotel: Hotel) -> Element {
    rsx! {
        div { class: "hotel-card",
            img { src: "{hotel.image_url()}", alt: "{hotel.name}" }
            div { class: "hotel-card-body",
                div { class: "hotel-address", "{hotel.address}" }
                div { class: "hotel-name", "{hotel.name}" }
                div { class: "hotel-price", "{hotel.price_label()}" }
            }
        }
    }
}

#[component]
pub fn Hotels() -> Element {
    let auth = use_auth();
    let nav = use_router();

    let all = use_resource(move || {
        let auth = auth.clone();
        async move {
            let token = auth.token();
            catalog::hotels(auth.backend(), token.as_deref()).await
        }
    });

    let term = nav.query_params().get(SEARCH_KEY).unwrap_or_default().to_string();

    let on_search = {
        let nav = nav.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            let mut params = nav.query_params();
            if value.is_empty() {
                params.remove(SEARCH_KEY);
            } else {
                params.insert(SEARCH_KEY, value);
            }
            nav.set_query_params(&params);
        }
    };

    let on_create = {
        let nav = nav.clone();
        move |_: MouseEvent| nav.navigate("/hotels/create")
    };

    let body = match all.cloned() {
        None => rsx! { Spinner { label: "Loading hotels..." } },
        Some(hotels) => {
            let shown = catalog::filter_hotels(&hotels, &term);
            if shown.is_empty() {
                let message = if term.is_empty() {
                    "No hotels yet. Start by creating one!".to_string()
                } else {
                    format!("No results for \"{term}\"")
                };
                rsx! { p { class: "empty", "{message}" } }
            } else {
                rsx! {
                    p { class: "stat-label", "{shown.len()} hotels" }
                    div { class: "hotel-grid",
                        for hotel in shown {
                            HotelCard { key: "{hotel.id}", hotel }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            Input {
                id: "hotel-search",
                class: "search",
                r#type: "search",
                placeholder: "Search by name or address",
                value: term.clone(),
                oninput: on_search,
            }
            Button { variant: ButtonVariant::Outline, onclick: on_create,
                Icon { icon: FaPlus, width: 12, height: 12 }
                "Create a new hotel"
            }
        }
        {body}
    }
}

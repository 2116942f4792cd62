use api::{catalog, ProductStatus};
use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;

fn badge_class(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Active => "badge badge-active",
        ProductStatus::LowStock => "badge badge-low",
        ProductStatus::OutOfStock => "badge badge-out",
        ProductStatus::Unknown => "badge",
    }
}

#[component]
pub fn Products() -> Element {
    let auth = use_auth();

    let products = use_resource(move || {
        let auth = auth.clone();
        async move {
            let token = auth.token();
            catalog::products(auth.backend(), token.as_deref()).await
        }
    });

    let Some(products) = products.cloned() else {
        return rsx! { Spinner { label: "Loading products..." } };
    };

    if products.is_empty() {
        return rsx! { p { class: "empty", "No products yet." } };
    }

    rsx! {
        table { class: "data",
            thead {
                tr {
                    th { "Name" }
                    th { "Status" }
                    th { "Price" }
                    th { "Stock" }
                }
            }
            tbody {
                for product in products {
                    tr { key: "{product.id}",
                        td { "{product.name}" }
                        td {
                            span { class: badge_class(product.status), "{product.status.label()}" }
                        }
                        td { {product.price_label()} }
                        td { "{product.stock}" }
                    }
                }
            }
        }
    }
}

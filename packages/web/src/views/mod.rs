mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod dashboard;
pub use dashboard::Dashboard;

mod hotels;
pub use hotels::Hotels;

mod create_hotel;
pub use create_hotel::CreateHotel;

mod products;
pub use products::Products;

mod users;
pub use users::Users;

use dioxus::prelude::*;

/// Centered card used by the guest screens.
#[component]
fn AuthCard(title: String, children: Element, footer: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        div { class: "auth-page",
            div { class: "auth-brand", "RED PRODUCT" }
            div { class: "auth-card",
                h1 { "{title}" }
                {children}
            }
            div { class: "auth-links", {footer} }
        }
    }
}

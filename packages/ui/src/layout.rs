use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaBoxOpen, FaGauge, FaHotel, FaUsers};
use crate::navigation::Link;
use crate::{Icon, UI_CSS};

/// Shell for signed-in screens: navigation sidebar, header with the current
/// user, and the screen itself as `children`.
#[component]
pub fn DashboardLayout(title: String, children: Element) -> Element {
    let auth = use_auth();
    let user = auth.user();
    let is_admin = user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }

        div { class: "dashboard",
            aside { class: "dashboard-sidebar",
                div { class: "dashboard-brand", "RED PRODUCT" }
                nav { class: "dashboard-nav",
                    Link { to: "/dashboard", class: "nav-link", active_class: "active",
                        Icon { icon: FaGauge, width: 14, height: 14 }
                        span { "Dashboard" }
                    }
                    Link { to: "/hotels", class: "nav-link", active_class: "active",
                        Icon { icon: FaHotel, width: 14, height: 14 }
                        span { "Hotels" }
                    }
                    Link { to: "/products", class: "nav-link", active_class: "active",
                        Icon { icon: FaBoxOpen, width: 14, height: 14 }
                        span { "Products" }
                    }
                    if is_admin {
                        Link { to: "/users", class: "nav-link", active_class: "active",
                            Icon { icon: FaUsers, width: 14, height: 14 }
                            span { "Users" }
                        }
                    }
                }
                if let Some(user) = &user {
                    div { class: "dashboard-user",
                        img { class: "avatar", src: "{user.avatar_url()}", alt: "{user.display_name()}" }
                        div {
                            div { class: "dashboard-user-name", "{user.display_name()}" }
                            div { class: "dashboard-user-role", "{user.role.as_str()}" }
                        }
                    }
                }
            }

            div { class: "dashboard-main",
                header { class: "dashboard-header",
                    h1 { "{title}" }
                    LogoutButton { class: "btn btn-ghost" }
                }
                main { class: "dashboard-content", {children} }
            }
        }
    }
}

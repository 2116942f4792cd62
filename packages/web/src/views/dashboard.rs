use api::catalog;
use dioxus::prelude::*;
use ui::icons::{FaEnvelope, FaHotel, FaP, FaUsers};
use ui::{use_auth, Icon};

#[component]
fn StatCard(label: String, value: String, color: String, children: Element) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-icon", style: "background: {color}", {children} }
            div {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

/// Summary cards. Hotel and user counts come from the catalog.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    let counts = use_resource(move || {
        let auth = auth.clone();
        async move {
            let token = auth.token();
            let hotels = catalog::hotels(auth.backend(), token.as_deref()).await.len();
            let users = catalog::users(auth.backend(), token.as_deref()).await.len();
            (hotels, users)
        }
    });
    let (hotels, users) = match counts.cloned() {
        Some((h, u)) => (h.to_string(), u.to_string()),
        None => ("…".to_string(), "…".to_string()),
    };

    rsx! {
        div { class: "stats-grid",
            StatCard { label: "Forms", value: "125", color: "#A88ADD",
                Icon { icon: FaEnvelope, width: 18, height: 18 }
            }
            StatCard { label: "Messages", value: "40", color: "#00C4B4",
                Icon { icon: FaP, width: 18, height: 18 }
            }
            StatCard { label: "Users", value: users, color: "#FFBE00",
                Icon { icon: FaUsers, width: 18, height: 18 }
            }
            StatCard { label: "Emails", value: "25", color: "#F20000",
                Icon { icon: FaEnvelope, width: 18, height: 18 }
            }
            StatCard { label: "Hotels", value: hotels, color: "#9C27B0",
                Icon { icon: FaHotel, width: 18, height: 18 }
            }
            StatCard { label: "Entities", value: "02", color: "#1565D8",
                Icon { icon: FaUsers, width: 18, height: 18 }
            }
        }
    }
}

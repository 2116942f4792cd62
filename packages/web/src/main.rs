use std::rc::Rc;

use api::{Policy, Role};
use dioxus::prelude::*;
use router::RouteTable;
use store::DashboardConfig;
use ui::{use_router, AuthProvider, DashboardLayout, Guarded, Redirect, RouterProvider};
use views::{CreateHotel, Dashboard, ForgotPassword, Hotels, Login, Products, Register, Users};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Every screen the dashboard can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Hotels,
    CreateHotel,
    Products,
    Users,
    NotFound,
}

impl Screen {
    fn policy(&self) -> Policy {
        match self {
            Screen::Login | Screen::Register | Screen::ForgotPassword => Policy::GuestsOnly,
            Screen::Dashboard | Screen::Hotels | Screen::CreateHotel | Screen::Products => {
                Policy::MembersOnly
            }
            Screen::Users => Policy::RoleRestricted {
                role: Role::Admin,
                fallback: "/hotels",
            },
            Screen::NotFound => Policy::OpenToAll,
        }
    }

    /// Header title inside the dashboard layout; `None` for full-page screens.
    fn title(&self) -> Option<&'static str> {
        match self {
            Screen::Dashboard => Some("Dashboard"),
            Screen::Hotels => Some("Hotels"),
            Screen::CreateHotel => Some("New hotel"),
            Screen::Products => Some("Products"),
            Screen::Users => Some("Users"),
            Screen::Login | Screen::Register | Screen::ForgotPassword | Screen::NotFound => None,
        }
    }

    fn render(&self) -> Element {
        match self {
            Screen::Login => rsx! { Login {} },
            Screen::Register => rsx! { Register {} },
            Screen::ForgotPassword => rsx! { ForgotPassword {} },
            Screen::Dashboard => rsx! { Dashboard {} },
            Screen::Hotels => rsx! { Hotels {} },
            Screen::CreateHotel => rsx! { CreateHotel {} },
            Screen::Products => rsx! { Products {} },
            Screen::Users => rsx! { Users {} },
            Screen::NotFound => rsx! { Redirect { to: "/login" } },
        }
    }
}

#[rustfmt::skip]
fn route_table() -> RouteTable<Screen> {
    RouteTable::new()
        .route("/login", Screen::Login)
        .route("/register", Screen::Register)
        .route("/forgot-password", Screen::ForgotPassword)
        .route("/dashboard", Screen::Dashboard)
        .route("/hotels", Screen::Hotels)
        .route("/hotels/create", Screen::CreateHotel)
        .route("/products", Screen::Products)
        .route("/users", Screen::Users)
        .fallback(Screen::NotFound)
}

fn load_config() -> DashboardConfig {
    DashboardConfig::load(include_str!("../dashboard.toml"), option_env!("DASHBOARD_API_URL"))
}

fn main() {
    dioxus::logger::initialize_default();

    for path in route_table().duplicate_paths() {
        tracing::warn!("Route {path} is declared more than once; the first entry wins");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!(api = %config.api.base_url, "Starting dashboard");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        RouterProvider { config: config.clone(),
            AuthProvider { config,
                Shell {}
            }
        }
    }
}

/// Match the current location and render its screen behind its guard.
#[component]
fn Shell() -> Element {
    let nav = use_router();
    let table = use_hook(|| Rc::new(route_table()));
    let screen = nav.match_route(&table).copied().unwrap_or(Screen::NotFound);

    rsx! {
        Guarded { key: "{screen:?}", policy: screen.policy(),
            if let Some(title) = screen.title() {
                DashboardLayout { title: title.to_string(), {screen.render()} }
            } else {
                {screen.render()}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_has_one_policy_per_path() {
        assert!(route_table().duplicate_paths().is_empty());
    }

    #[test]
    fn test_route_matching() {
        let table = route_table();
        assert_eq!(table.match_path("/hotels"), Some(&Screen::Hotels));
        assert_eq!(table.match_path("/hotels/create"), Some(&Screen::CreateHotel));
        assert_eq!(table.match_path("/nowhere"), Some(&Screen::NotFound));
        assert_eq!(table.match_path("/"), Some(&Screen::NotFound));
    }

    #[test]
    fn test_screen_policies() {
        assert_eq!(Screen::Login.policy(), Policy::GuestsOnly);
        assert_eq!(Screen::CreateHotel.policy(), Policy::MembersOnly);
        assert_eq!(
            Screen::Users.policy(),
            Policy::RoleRestricted {
                role: Role::Admin,
                fallback: "/hotels"
            }
        );
        assert_eq!(Screen::NotFound.policy(), Policy::OpenToAll);
    }

    #[test]
    fn test_member_screens_use_the_layout() {
        for screen in [
            Screen::Dashboard,
            Screen::Hotels,
            Screen::CreateHotel,
            Screen::Products,
            Screen::Users,
        ] {
            assert!(screen.title().is_some(), "{screen:?}");
        }
        assert!(Screen::Login.title().is_none());
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = DashboardConfig::from_toml(include_str!("../dashboard.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }
}

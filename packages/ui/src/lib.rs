//! Shared Dioxus UI for the hotel dashboard.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `auth` | [`AuthProvider`] and [`use_auth`]: the session context (`session`, `login`, `register`, `logout`). |
//! | `navigation` | [`RouterProvider`], [`use_router`], [`Link`] and [`Redirect`] over the `router` crate. |
//! | `guard` | [`Guarded`]: renders children, a spinner, nothing, or a redirect per [`api::Policy`]. |
//! | `layout` | [`DashboardLayout`]: sidebar, header and content area for signed-in screens. |
//! | [`components`] | Form building blocks. |
//! | `platform` | Concrete history/storage/session types for the current target. |

use dioxus::prelude::*;

pub mod components;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod platform;
pub use platform::{
    history_mode, make_history, make_session, make_storage, AppHistory, AppSession, AppStorage,
};

mod auth;
pub use auth::{use_auth, AuthHandle, AuthProvider, LogoutButton};

mod navigation;
pub use navigation::{use_router, Link, Redirect, RouterHandle, RouterProvider};

mod guard;
pub use guard::Guarded;

mod layout;
pub use layout::DashboardLayout;

//! Dioxus bindings for the `router` crate.
//!
//! [`RouterProvider`] builds one [`Router`] over the platform history and keeps
//! a `Signal<Location>` in sync with it, so any component that reads the
//! location re-renders on navigation, including back/forward.

use std::rc::Rc;

use dioxus::prelude::*;
use router::{Location, NavigateOptions, QueryParams, RouteTable, Router};
use store::DashboardConfig;

use crate::platform::{make_history, AppHistory};

/// Handle returned by [`use_router`].
#[derive(Clone)]
pub struct RouterHandle {
    location: Signal<Location>,
    router: Rc<Router<AppHistory>>,
}

impl RouterHandle {
    /// Current location. Reading it subscribes the calling component.
    pub fn location(&self) -> Location {
        (self.location)()
    }

    pub fn navigate(&self, target: &str) {
        self.router.navigate(target, NavigateOptions::push());
    }

    /// Navigate without adding a history entry.
    pub fn replace(&self, target: &str) {
        self.router.navigate(target, NavigateOptions::replace());
    }

    pub fn query_params(&self) -> QueryParams {
        self.location().query_params()
    }

    pub fn set_query_params(&self, params: &QueryParams) {
        self.router.set_query_params(params);
    }

    pub fn href_for(&self, target: &str) -> String {
        self.router.href_for(target)
    }

    /// Screen for the current location.
    pub fn match_route<'t, S>(&self, table: &'t RouteTable<S>) -> Option<&'t S> {
        table.match_location(&self.location())
    }
}

pub fn use_router() -> RouterHandle {
    use_context::<RouterHandle>()
}

#[component]
pub fn RouterProvider(config: DashboardConfig, children: Element) -> Element {
    let router = use_hook(|| Rc::new(Router::new(make_history(&config))));
    let location = use_signal(|| router.current_location());

    use_hook(|| {
        router.subscribe(move |next: &Location| {
            let mut location = location;
            location.set(next.clone());
        });
    });

    use_context_provider(|| RouterHandle {
        location,
        router: router.clone(),
    });

    rsx! {
        {children}
    }
}

/// Anchor that navigates through the router instead of reloading the page.
#[component]
pub fn Link(
    to: String,
    #[props(default)] class: String,
    /// Extra class applied when the current path equals `to`.
    #[props(default)]
    active_class: String,
    children: Element,
) -> Element {
    let nav = use_router();
    let href = nav.href_for(&to);
    let active = nav.location().path() == Location::parse(&to).path();
    let class = if active && !active_class.is_empty() {
        format!("{class} {active_class}")
    } else {
        class
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                nav.navigate(&to);
            },
            {children}
        }
    }
}

/// Replace the current location with `to` once mounted.
#[component]
pub fn Redirect(to: String) -> Element {
    let nav = use_router();
    use_effect(move || {
        tracing::debug!("Redirecting to {to}");
        nav.replace(&to);
    });
    rsx! {}
}

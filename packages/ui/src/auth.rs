//! Session context for the UI.
//!
//! [`AuthProvider`] owns the one [`AppSession`] of the application and mirrors
//! its state into a signal so components re-render on login and logout.
//! Screens reach it only through [`use_auth`].

use std::rc::Rc;

use api::{ApiError, HttpBackend, SessionState, User};
use dioxus::prelude::*;
use store::DashboardConfig;

use crate::navigation::use_router;
use crate::platform::{make_session, AppSession};

/// Handle returned by [`use_auth`].
#[derive(Clone)]
pub struct AuthHandle {
    state: Signal<SessionState>,
    manager: Rc<AppSession>,
}

impl AuthHandle {
    /// Current session. Reading it subscribes the calling component.
    pub fn session(&self) -> SessionState {
        (self.state)()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.manager.token()
    }

    pub fn backend(&self) -> &HttpBackend {
        self.manager.backend()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let result = self.manager.login(email, password).await;
        self.sync();
        result
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let result = self.manager.register(name, email, password).await;
        self.sync();
        result
    }

    pub async fn logout(&self) {
        self.manager.logout().await;
        self.sync();
    }

    /// Forget the session after the backend refused the token.
    pub fn invalidate(&self) {
        self.manager.invalidate();
        self.sync();
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.manager.snapshot());
    }
}

/// Get the session context.
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Provider component that restores the session on mount.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: DashboardConfig, children: Element) -> Element {
    let manager = use_hook(|| Rc::new(make_session(&config)));
    let mut state = use_signal(SessionState::default);

    let restore = manager.clone();
    let _ = use_resource(move || {
        let restore = restore.clone();
        async move {
            state.set(restore.initialize().await);
        }
    });

    use_context_provider(|| AuthHandle {
        state,
        manager: manager.clone(),
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let nav = use_router();

    let onclick = move |_| {
        let auth = auth.clone();
        let nav = nav.clone();
        async move {
            auth.logout().await;
            nav.replace("/login");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

//! Route protection policies.

use crate::auth::SessionState;
use crate::models::Role;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    OpenToAll,
    /// Signed-in users only; anonymous viewers go to the login screen.
    MembersOnly,
    /// Anonymous viewers only; signed-in users go to the landing screen.
    GuestsOnly,
    /// Signed-in users holding `role`; others who are signed in go to `fallback`.
    RoleRestricted { role: Role, fallback: &'static str },
}

/// What a guarded route should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render,
    /// A neutral loading indicator.
    Waiting,
    /// Nothing at all.
    Blank,
    /// Replace the current location with this path.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guard {
    pub login_path: &'static str,
    pub landing_path: &'static str,
}

impl Default for Guard {
    fn default() -> Self {
        Self {
            login_path: "/login",
            landing_path: "/dashboard",
        }
    }
}

impl Guard {
    pub fn evaluate(&self, policy: &Policy, session: &SessionState) -> Outcome {
        match *policy {
            Policy::OpenToAll => Outcome::Render,
            Policy::MembersOnly => match (session.loading, &session.user) {
                (true, _) => Outcome::Waiting,
                (false, None) => Outcome::Redirect(self.login_path),
                (false, Some(_)) => Outcome::Render,
            },
            Policy::GuestsOnly => match (session.loading, &session.user) {
                (true, _) => Outcome::Blank,
                (false, Some(_)) => Outcome::Redirect(self.landing_path),
                (false, None) => Outcome::Render,
            },
            Policy::RoleRestricted { role, fallback } => match (session.loading, &session.user) {
                (true, _) => Outcome::Blank,
                (false, None) => Outcome::Redirect(self.login_path),
                (false, Some(user)) if user.role == role => Outcome::Render,
                (false, Some(_)) => Outcome::Redirect(fallback),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    const ADMIN_ONLY: Policy = Policy::RoleRestricted {
        role: Role::Admin,
        fallback: "/hotels",
    };

    fn loading() -> SessionState {
        SessionState::default()
    }

    fn anonymous() -> SessionState {
        SessionState {
            user: None,
            loading: false,
        }
    }

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            user: Some(User {
                id: 1,
                name: "Moussa".into(),
                email: "moussa@red.com".into(),
                role,
                avatar: None,
                created_at: None,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_members_only() {
        let guard = Guard::default();
        assert_eq!(guard.evaluate(&Policy::MembersOnly, &loading()), Outcome::Waiting);
        assert_eq!(
            guard.evaluate(&Policy::MembersOnly, &anonymous()),
            Outcome::Redirect("/login")
        );
        assert_eq!(
            guard.evaluate(&Policy::MembersOnly, &signed_in(Role::User)),
            Outcome::Render
        );
    }

    #[test]
    fn test_guests_only() {
        let guard = Guard::default();
        assert_eq!(guard.evaluate(&Policy::GuestsOnly, &loading()), Outcome::Blank);
        assert_eq!(guard.evaluate(&Policy::GuestsOnly, &anonymous()), Outcome::Render);
        assert_eq!(
            guard.evaluate(&Policy::GuestsOnly, &signed_in(Role::Admin)),
            Outcome::Redirect("/dashboard")
        );
    }

    #[test]
    fn test_role_restricted() {
        let guard = Guard::default();
        assert_eq!(guard.evaluate(&ADMIN_ONLY, &loading()), Outcome::Blank);
        assert_eq!(guard.evaluate(&ADMIN_ONLY, &anonymous()), Outcome::Redirect("/login"));
        assert_eq!(guard.evaluate(&ADMIN_ONLY, &signed_in(Role::Admin)), Outcome::Render);
        // Wrong role goes to the fallback, not to login.
        assert_eq!(
            guard.evaluate(&ADMIN_ONLY, &signed_in(Role::User)),
            Outcome::Redirect("/hotels")
        );
    }

    #[test]
    fn test_open_to_all_ignores_session() {
        let guard = Guard::default();
        for session in [loading(), anonymous(), signed_in(Role::Other)] {
            assert_eq!(guard.evaluate(&Policy::OpenToAll, &session), Outcome::Render);
        }
    }
}

//! # Session guard
//!
//! | Type | Role |
//! |------|------|
//! | [`CredentialVault`] | Bearer token and cached user in a [`store::KeyValueStore`]. |
//! | [`SessionManager`] | Owns [`SessionState`]; rehydrates it once at startup and mutates it on login, register and logout. |
//! | [`Guard`] | Pure decision: given a [`Policy`] and a [`SessionState`], what to show ([`Outcome`]). |

mod credentials;
mod guard;
mod session;

pub use credentials::{CredentialVault, TOKEN_KEY, USER_KEY};
pub use guard::{Guard, Outcome, Policy};
pub use session::{SessionManager, SessionState};

//! # API crate — backend client and session logic for the hotel dashboard
//!
//! All persistence and business rules live in an external REST backend. This
//! crate is the only place that talks to it, and the only place that decides
//! who is signed in.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: [`User`], [`Role`], [`Hotel`], [`Price`], [`Product`], request bodies and the [`HotelDraft`] creation form. |
//! | [`error`] | [`ApiError`], the single error taxonomy surfaced to screens. |
//! | [`response`] | Pure interpretation of status / content type / body into a JSON payload or an [`ApiError`]. |
//! | [`backend`] | The [`Backend`] trait: one method per backend operation. |
//! | [`http`] | [`HttpBackend`], the `reqwest` implementation of [`Backend`]. |
//! | [`fallback`] | Fixed sample hotels and users substituted when listings fail. |
//! | [`catalog`] | Listing and creation operations with their fallback policies, plus local hotel filtering. |
//! | [`auth`] | Persisted credentials, the [`SessionManager`] lifecycle and the route [`Guard`]. |
//!
//! ## Failure policy
//!
//! Nothing here panics on a backend failure. Reads that feed listings
//! ([`catalog::hotels`], [`catalog::users`], [`catalog::products`]) substitute
//! a default; writes (login, register, hotel creation) return the error so the
//! screen can show it.

pub mod auth;
pub mod backend;
pub mod catalog;
pub mod error;
pub mod fallback;
pub mod http;
pub mod models;
pub mod response;

#[cfg(test)]
mod fake;

pub use auth::{CredentialVault, Guard, Outcome, Policy, SessionManager, SessionState};
pub use backend::Backend;
pub use error::ApiError;
pub use http::HttpBackend;
pub use models::{
    AuthPayload, Currency, Hotel, HotelDraft, ImageUpload, LoginRequest, Price, Product,
    ProductStatus, RegisterRequest, Role, User,
};

//! The [`Backend`] trait: one async method per REST operation.
//!
//! Screens and the session layer are generic over this trait, so the same code
//! runs against [`crate::HttpBackend`] in the browser and against scripted
//! fakes in tests.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{AuthPayload, Hotel, HotelDraft, LoginRequest, Product, RegisterRequest, User};

/// Async interface to the hotel backend.
pub trait Backend {
    /// Resolve a bearer token to its user.
    fn who_am_i(&self, token: &str) -> impl Future<Output = Result<User, ApiError>>;

    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<AuthPayload, ApiError>>;

    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>>;

    /// Invalidate `token` server-side.
    fn logout(&self, token: &str) -> impl Future<Output = Result<(), ApiError>>;

    /// Ask the backend to email a password reset link.
    fn forgot_password(&self, email: &str) -> impl Future<Output = Result<(), ApiError>>;

    fn list_hotels(
        &self,
        token: Option<&str>,
        search: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Hotel>, ApiError>>;

    fn list_users(&self, token: Option<&str>) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    fn list_products(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Product>, ApiError>>;

    fn create_hotel(
        &self,
        token: Option<&str>,
        draft: &HotelDraft,
    ) -> impl Future<Output = Result<Hotel, ApiError>>;
}

impl<B: Backend + ?Sized> Backend for std::rc::Rc<B> {
    async fn who_am_i(&self, token: &str) -> Result<User, ApiError> {
        (**self).who_am_i(token).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        (**self).login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        (**self).register(request).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        (**self).logout(token).await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        (**self).forgot_password(email).await
    }

    async fn list_hotels(
        &self,
        token: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Hotel>, ApiError> {
        (**self).list_hotels(token, search).await
    }

    async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>, ApiError> {
        (**self).list_users(token).await
    }

    async fn list_products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        (**self).list_products(token).await
    }

    async fn create_hotel(
        &self,
        token: Option<&str>,
        draft: &HotelDraft,
    ) -> Result<Hotel, ApiError> {
        (**self).create_hotel(token, draft).await
    }
}

//! Scripted [`Backend`] for unit tests.

use std::cell::RefCell;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{AuthPayload, Hotel, HotelDraft, LoginRequest, Product, RegisterRequest, User};

/// Each slot holds the reply for one operation; an empty slot answers with a
/// network error. Every call is recorded by name.
#[derive(Default)]
pub struct FakeBackend {
    pub who_am_i: Option<Result<User, ApiError>>,
    pub login: Option<Result<AuthPayload, ApiError>>,
    pub register: Option<Result<AuthPayload, ApiError>>,
    pub logout: Option<Result<(), ApiError>>,
    pub forgot: Option<Result<(), ApiError>>,
    pub hotels: Option<Result<Vec<Hotel>, ApiError>>,
    pub users: Option<Result<Vec<User>, ApiError>>,
    pub products: Option<Result<Vec<Product>, ApiError>>,
    pub created: Option<Result<Hotel, ApiError>>,
    pub log: RefCell<Vec<&'static str>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    fn reply<T: Clone>(
        &self,
        name: &'static str,
        slot: &Option<Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        self.log.borrow_mut().push(name);
        slot.clone()
            .unwrap_or_else(|| Err(ApiError::Network("connection refused".into())))
    }
}

impl Backend for FakeBackend {
    async fn who_am_i(&self, _token: &str) -> Result<User, ApiError> {
        self.reply("who_am_i", &self.who_am_i)
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        self.reply("login", &self.login)
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        self.reply("register", &self.register)
    }

    async fn logout(&self, _token: &str) -> Result<(), ApiError> {
        self.reply("logout", &self.logout)
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        self.reply("forgot_password", &self.forgot)
    }

    async fn list_hotels(
        &self,
        _token: Option<&str>,
        _search: Option<&str>,
    ) -> Result<Vec<Hotel>, ApiError> {
        self.reply("list_hotels", &self.hotels)
    }

    async fn list_users(&self, _token: Option<&str>) -> Result<Vec<User>, ApiError> {
        self.reply("list_users", &self.users)
    }

    async fn list_products(&self, _token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        self.reply("list_products", &self.products)
    }

    async fn create_hotel(
        &self,
        _token: Option<&str>,
        _draft: &HotelDraft,
    ) -> Result<Hotel, ApiError> {
        self.reply("create_hotel", &self.created)
    }
}

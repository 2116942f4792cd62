//! # HTTP backend — `reqwest` client for the REST API
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `who_am_i` | `GET /user` (bearer) |
//! | `login` | `POST /login` JSON `{email, password}` |
//! | `register` | `POST /register` JSON `{name, email, password, password_confirmation}` |
//! | `logout` | `POST /logout` (bearer) |
//! | `forgot_password` | `POST /forgot-password` JSON `{email}` |
//! | `list_hotels` | `GET /hotels[?search=..]` |
//! | `list_users` | `GET /users` |
//! | `list_products` | `GET /products` |
//! | `create_hotel` | `POST /hotels` multipart: text fields plus optional `image` |
//!
//! Every request asks for `application/json`; responses go through
//! [`crate::response::interpret`]. Multipart bodies leave `Content-Type` to the
//! client so the boundary is filled in.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde_json::{json, Value};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{AuthPayload, Hotel, HotelDraft, LoginRequest, Product, RegisterRequest, User};
use crate::response::{decode, interpret};

/// `reqwest`-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &store::ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Option<Value>, ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        interpret(status, &url, content_type.as_deref(), &body)
    }
}

impl Backend for HttpBackend {
    async fn who_am_i(&self, token: &str) -> Result<User, ApiError> {
        decode(self.send(self.request(Method::GET, "/user", Some(token))).await?)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        let builder = self.request(Method::POST, "/login", None).json(request);
        decode(self.send(builder).await?).inspect_err(|e| tracing::error!("Login failed: {e}"))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        let builder = self.request(Method::POST, "/register", None).json(request);
        decode(self.send(builder).await?)
            .inspect_err(|e| tracing::error!("Registration failed: {e}"))
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/logout", Some(token)))
            .await
            .map(|_| ())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/forgot-password", None)
            .json(&json!({ "email": email }));
        self.send(builder).await.map(|_| ())
    }

    async fn list_hotels(
        &self,
        token: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Hotel>, ApiError> {
        let mut builder = self.request(Method::GET, "/hotels", token);
        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            builder = builder.query(&[("search", search)]);
        }
        decode(self.send(builder).await?)
    }

    async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>, ApiError> {
        decode(self.send(self.request(Method::GET, "/users", token)).await?)
    }

    async fn list_products(&self, token: Option<&str>) -> Result<Vec<Product>, ApiError> {
        decode(self.send(self.request(Method::GET, "/products", token)).await?)
    }

    async fn create_hotel(
        &self,
        token: Option<&str>,
        draft: &HotelDraft,
    ) -> Result<Hotel, ApiError> {
        let mut form = Form::new();
        for (name, value) in draft.fields() {
            form = form.text(name, value);
        }
        if let Some(image) = &draft.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }
        let builder = self.request(Method::POST, "/hotels", token).multipart(form);
        decode(self.send(builder).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let backend = HttpBackend::new("http://localhost:8000/api/");
        assert_eq!(backend.base_url(), "http://localhost:8000/api");
        assert_eq!(backend.url("/hotels"), "http://localhost:8000/api/hotels");
    }

    #[test]
    fn test_bearer_and_accept_headers() {
        let backend = HttpBackend::new("http://localhost:8000/api");
        let request = backend
            .request(Method::GET, "/user", Some("tok"))
            .build()
            .unwrap();
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[reqwest::header::AUTHORIZATION], "Bearer tok");

        let request = backend.request(Method::GET, "/hotels", None).build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = store::ApiConfig {
            base_url: "https://hotels.test/api".into(),
        };
        assert_eq!(HttpBackend::from_config(&config).base_url(), "https://hotels.test/api");
    }
}

//! # Catalog operations — listings with fallbacks, hotel creation
//!
//! | Operation | On failure |
//! |-----------|-----------|
//! | [`hotels`] / [`search_hotels`] | [`sample_hotels`](crate::fallback::sample_hotels), also when the backend returns an empty list |
//! | [`users`] | [`sample_users`](crate::fallback::sample_users), also when empty |
//! | [`products`] | empty list |
//! | [`create_hotel`] | error returned |
//! | [`forgot_password`] | error returned |
//!
//! The hotel screen fetches the full list once and narrows it locally with
//! [`filter_hotels`] on every keystroke. That is fine for the few dozen hotels
//! this backend holds; it does not page.

use crate::backend::Backend;
use crate::error::ApiError;
use crate::fallback::{sample_hotels, sample_users};
use crate::models::{Hotel, HotelDraft, Product, User};

/// Every hotel, or the sample set when the backend fails or is empty.
pub async fn hotels<B: Backend>(backend: &B, token: Option<&str>) -> Vec<Hotel> {
    search_hotels(backend, token, None).await
}

/// Hotels matching `search` server-side, with the same fallback as [`hotels`].
pub async fn search_hotels<B: Backend>(
    backend: &B,
    token: Option<&str>,
    search: Option<&str>,
) -> Vec<Hotel> {
    match backend.list_hotels(token, search).await {
        Ok(hotels) if !hotels.is_empty() => hotels,
        Ok(_) => {
            tracing::warn!("Hotel list is empty, using local sample data");
            sample_hotels()
        }
        Err(e) => {
            tracing::warn!("Hotel list unavailable ({e}), using local sample data");
            sample_hotels()
        }
    }
}

/// Every user, or the sample set when the backend fails or is empty.
pub async fn users<B: Backend>(backend: &B, token: Option<&str>) -> Vec<User> {
    match backend.list_users(token).await {
        Ok(users) if !users.is_empty() => users,
        Ok(_) => {
            tracing::warn!("User list is empty, using local sample data");
            sample_users()
        }
        Err(e) => {
            tracing::warn!("User list unavailable ({e}), using local sample data");
            sample_users()
        }
    }
}

/// Every product, or nothing.
pub async fn products<B: Backend>(backend: &B, token: Option<&str>) -> Vec<Product> {
    backend.list_products(token).await.unwrap_or_else(|e| {
        tracing::warn!("Product list unavailable: {e}");
        Vec::new()
    })
}

/// Validate `draft` locally, then submit it.
pub async fn create_hotel<B: Backend>(
    backend: &B,
    token: Option<&str>,
    draft: &HotelDraft,
) -> Result<Hotel, ApiError> {
    draft.validate()?;
    let hotel = backend
        .create_hotel(token, draft)
        .await
        .inspect_err(|e| tracing::error!("Hotel creation failed: {e}"))?;
    tracing::info!(id = hotel.id, "Created hotel {}", hotel.name);
    Ok(hotel)
}

/// Request a password reset email.
pub async fn forgot_password<B: Backend>(backend: &B, email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("Please enter a valid email".to_string()));
    }
    backend.forgot_password(email).await
}

/// Hotels whose name or address contains `term`, ignoring case. A blank term
/// keeps everything.
pub fn filter_hotels(hotels: &[Hotel], term: &str) -> Vec<Hotel> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return hotels.to_vec();
    }
    hotels.iter().filter(|h| h.matches(&term)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use crate::models::{Currency, Price};

    fn hotel(id: u64, name: &str) -> Hotel {
        Hotel {
            id,
            name: name.into(),
            address: "Dakar".into(),
            price: Price::Amount(10.0),
            currency: None,
            image: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_hotels_network_error_falls_back() {
        let backend = FakeBackend::default();
        let hotels = hotels(&backend, None).await;
        assert_eq!(hotels.len(), 8);
        assert_eq!(hotels, sample_hotels());
        assert_eq!(backend.calls(), vec!["list_hotels"]);
    }

    #[tokio::test]
    async fn test_hotels_empty_falls_back() {
        let backend = FakeBackend {
            hotels: Some(Ok(Vec::new())),
            ..Default::default()
        };
        assert_eq!(hotels(&backend, Some("tok")).await.len(), 8);
    }

    #[tokio::test]
    async fn test_hotels_from_backend() {
        let backend = FakeBackend {
            hotels: Some(Ok(vec![hotel(42, "Lodge")])),
            ..Default::default()
        };
        let hotels = search_hotels(&backend, None, Some("lod")).await;
        assert_eq!(hotels, vec![hotel(42, "Lodge")]);
    }

    #[tokio::test]
    async fn test_users_fallback() {
        let backend = FakeBackend {
            users: Some(Err(ApiError::Server { status: 500 })),
            ..Default::default()
        };
        assert_eq!(users(&backend, Some("tok")).await, sample_users());
    }

    #[tokio::test]
    async fn test_products_empty_on_failure() {
        let backend = FakeBackend::default();
        assert!(products(&backend, None).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_hotel_validates_before_calling() {
        let backend = FakeBackend::default();
        let err = create_hotel(&backend, Some("tok"), &HotelDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_hotel_propagates_backend_errors() {
        let backend = FakeBackend {
            created: Some(Err(ApiError::Validation("The name has already been taken.".into()))),
            ..Default::default()
        };
        let draft = HotelDraft {
            name: "Lodge".into(),
            address: "Mar Lodj".into(),
            email: "a@b.sn".into(),
            phone: "77".into(),
            price: "1000".into(),
            currency: Currency::EUR,
            image: None,
        };
        let err = create_hotel(&backend, Some("tok"), &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "The name has already been taken.");
        assert_eq!(backend.calls(), vec!["create_hotel"]);
    }

    #[tokio::test]
    async fn test_forgot_password() {
        let backend = FakeBackend {
            forgot: Some(Ok(())),
            ..Default::default()
        };
        assert!(forgot_password(&backend, " awa@red.com ").await.is_ok());
        assert!(forgot_password(&backend, "").await.is_err());
        assert_eq!(backend.calls(), vec!["forgot_password"]);
    }

    #[test]
    fn test_filter_hotels() {
        let all = sample_hotels();
        assert_eq!(filter_hotels(&all, "").len(), 8);
        assert_eq!(filter_hotels(&all, "  ").len(), 8);

        let saly = filter_hotels(&all, "SALY");
        assert_eq!(saly.len(), 2);
        assert!(saly.iter().all(|h| h.id == 6 || h.id == 7));

        let pullman = filter_hotels(&all, "pullman");
        assert_eq!(pullman.len(), 2);

        assert!(filter_hotels(&all, "paris").is_empty());
    }
}

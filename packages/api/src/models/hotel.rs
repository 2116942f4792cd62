//! # Hotels and the hotel creation form
//!
//! The backend is inconsistent about prices: freshly created hotels come back
//! with a bare number (or a numeric string) plus a `currency`, while older rows
//! carry a preformatted label such as `"25.000 XOF per night"`. [`Price`]
//! accepts both and [`Hotel::price_label`] renders either for display.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const DEFAULT_CURRENCY: &str = "XOF";
const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// A nightly price: a plain amount or a preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

/// A hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Hotel {
    /// `"<amount> <currency> per night"` for numeric prices, the label as-is otherwise.
    pub fn price_label(&self) -> String {
        let currency = self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        match &self.price {
            Price::Amount(amount) => format!("{} {currency} per night", format_amount(*amount)),
            Price::Text(text) if text.trim().parse::<f64>().is_ok() => {
                format!("{} {currency} per night", text.trim())
            }
            Price::Text(text) => text.clone(),
        }
    }

    /// Image URL, or a placeholder when the hotel has none.
    pub fn image_url(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    /// Case-insensitive substring match on name or address. `term` must
    /// already be lowercase.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.address.to_lowercase().contains(term)
    }
}

/// Currencies offered by the creation form.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    XOF,
    EUR,
    USD,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::XOF, Currency::EUR, Currency::USD];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::XOF => "XOF",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::XOF => "F XOF",
            Currency::EUR => "Euro (€)",
            Currency::USD => "Dollar ($)",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ApiError::Validation(format!("Unsupported currency: {s}")))
    }
}

/// A picture attached to a new hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload, guessing the MIME type from the file extension.
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        let content_type = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name: file_name.to_string(),
            content_type,
            bytes,
        }
    }

    /// Inline `data:` URL for previewing the picture before upload.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.content_type)
    }
}

/// The hotel creation form as typed by the user.
///
/// Contact details have no dedicated backend columns; they travel inside the
/// composed [`description`](Self::description).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelDraft {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub price: String,
    pub currency: Currency,
    pub image: Option<ImageUpload>,
}

impl HotelDraft {
    pub fn description(&self) -> String {
        format!("Email: {}, Tel: {}", self.email.trim(), self.phone.trim())
    }

    /// First problem with the form, checked in field order.
    pub fn validate(&self) -> Result<(), ApiError> {
        let invalid = |message: &str| Err(ApiError::Validation(message.to_string()));

        if self.name.trim().is_empty() {
            return invalid("The hotel name is required");
        }
        if self.address.trim().is_empty() {
            return invalid("The address is required");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return invalid("Please enter a valid email");
        }
        if self.phone.trim().is_empty() {
            return invalid("The phone number is required");
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => Ok(()),
            _ => invalid("The price must be a positive number"),
        }
    }

    /// Text fields of the multipart body, in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("address", self.address.trim().to_string()),
            ("price", self.price.trim().to_string()),
            ("currency", self.currency.code().to_string()),
            ("description", self.description()),
        ]
    }
}

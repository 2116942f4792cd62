use serde::{Deserialize, Serialize};

use super::hotel::Price;

/// Stock status as labelled by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::LowStock => "Low Stock",
            ProductStatus::Unknown => "Unknown",
        }
    }
}

/// A row of the (placeholder) product table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Decimal columns may arrive as numbers or as numeric strings.
    pub price: Price,
    #[serde(default)]
    pub stock: u32,
    pub status: ProductStatus,
}

impl Product {
    /// Two-decimal amount when the price is numeric, the raw text otherwise.
    pub fn price_label(&self) -> String {
        match &self.price {
            Price::Amount(amount) => format!("{amount:.2}"),
            Price::Text(text) => match text.trim().parse::<f64>() {
                Ok(amount) => format!("{amount:.2}"),
                Err(_) => text.clone(),
            },
        }
    }
}

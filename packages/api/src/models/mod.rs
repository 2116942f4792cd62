//! Wire types exchanged with the backend.

mod hotel;
mod product;
mod user;

pub use hotel::{Currency, Hotel, HotelDraft, ImageUpload, Price};
pub use product::{Product, ProductStatus};
pub use user::{AuthPayload, LoginRequest, RegisterRequest, Role, User};

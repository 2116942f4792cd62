//! Fixed sample data substituted when a listing cannot be loaded.
//!
//! Sample hotels carry no image and render with the placeholder.

use crate::models::{Hotel, Price, Role, User};

fn hotel(id: u64, name: &str, address: &str, price: &str, description: &str) -> Hotel {
    Hotel {
        id,
        name: name.to_string(),
        address: address.to_string(),
        price: Price::Text(price.to_string()),
        currency: None,
        image: None,
        description: Some(description.to_string()),
    }
}

/// The eight sample hotels.
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            1,
            "Hôtel Terrou-Bi",
            "Boulevard Martin Luther King Dakar, 11500",
            "25.000 XOF per night",
            "Luxury and comfort by the ocean.",
        ),
        hotel(
            2,
            "King Fahd Palace",
            "Rte des Almadies, Dakar",
            "20.000 XOF per night",
            "A modern palace for your stays.",
        ),
        hotel(
            3,
            "Radisson Blu Hotel",
            "Rte de la Corniche O, Dakar 16868",
            "22.000 XOF per night",
            "Contemporary design and a striking view.",
        ),
        hotel(
            4,
            "Pullman Dakar Teranga",
            "Place de l'Independance, 10 Rue PL 29, Dakar",
            "30.000 XOF per night",
            "In the heart of the business district.",
        ),
        hotel(
            5,
            "Hôtel Lac Rose",
            "Lac Rose, Dakar",
            "25.000 XOF per night",
            "Serenity on the lake shore.",
        ),
        hotel(
            6,
            "Hôtel Saly",
            "Mbour, Sénégal",
            "20.000 XOF per night",
            "Relaxation on the Petite Côte.",
        ),
        hotel(
            7,
            "Palm Beach Resort & Spa",
            "BP64, Saly 23000",
            "22.000 XOF per night",
            "Luxury and spa in Saly.",
        ),
        hotel(
            8,
            "Pullman Dakar Teranga",
            "Place de l'Independance, 10 Rue PL 29, Dakar",
            "30.000 XOF per night",
            "Excellence downtown.",
        ),
    ]
}

fn user(id: u64, name: &str, email: &str, role: Role) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
        created_at: None,
    }
}

/// The five sample users.
pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Admin User", "admin@red.com", Role::Admin),
        user(2, "John Doe", "john@test.com", Role::User),
        user(3, "Jane Smith", "jane@test.com", Role::User),
        user(4, "Alice Cooper", "alice@test.com", Role::User),
        user(5, "Bob Marley", "bob@test.com", Role::User),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_hotels().len(), 8);
        assert_eq!(sample_users().len(), 5);
        assert_eq!(sample_users().iter().filter(|u| u.is_admin()).count(), 1);
    }

    #[test]
    fn test_sample_hotel_ids_are_unique() {
        let mut ids: Vec<u64> = sample_hotels().iter().map(|h| h.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(sample_hotels()[0].price_label(), "25.000 XOF per night");
    }

    #[test]
    fn test_sample_hotels_use_placeholder_image() {
        for hotel in sample_hotels() {
            assert_eq!(hotel.image, None);
            assert!(hotel.image_url().starts_with("https://placehold.co/"));
        }
    }
}

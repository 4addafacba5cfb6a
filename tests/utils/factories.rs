/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use tasteboard_lib::modules::restaurant::{
    domain::{
        Address, Author, ContactInformation, GeoLocation, OperatingHours, Restaurant, Review,
        TimeRange,
    },
    RestaurantCreateUpdateRequest,
};

/// Fixed instant all factories post reviews at unless told otherwise
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
}

pub fn author(id: &str) -> Author {
    Author::new(id, format!("{id}-handle")).with_names(id.to_uppercase(), "Tester")
}

pub struct RestaurantFactory {
    name: String,
    cuisine_type: String,
    geo_location: GeoLocation,
    average_rating: Option<f32>,
    reviews: Vec<Review>,
}

impl Default for RestaurantFactory {
    fn default() -> Self {
        Self {
            name: "Test Restaurant".to_string(),
            cuisine_type: "Fusion".to_string(),
            geo_location: GeoLocation::new(51.5074, -0.1278),
            average_rating: None,
            reviews: Vec::new(),
        }
    }
}

impl RestaurantFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_cuisine(mut self, cuisine: &str) -> Self {
        self.cuisine_type = cuisine.to_string();
        self
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.geo_location = GeoLocation::new(latitude, longitude);
        self
    }

    /// Override the derived rating (only for search fixtures without reviews)
    pub fn with_average_rating(mut self, rating: f32) -> Self {
        self.average_rating = Some(rating);
        self
    }

    /// Add a review by `author_id` posted `hours_after_base` hours after `base_time()`
    pub fn with_review(mut self, author_id: &str, rating: u8, hours_after_base: i64) -> Self {
        let posted = base_time() + chrono::Duration::hours(hours_after_base);
        self.reviews.push(Review::new(
            author(author_id),
            format!("Review by {author_id}"),
            rating,
            Vec::new(),
            posted,
        ));
        self
    }

    pub fn build(self) -> Restaurant {
        let mut restaurant = Restaurant::new(
            self.name,
            self.cuisine_type,
            ContactInformation {
                phone: "+44 20 7946 0000".to_string(),
                email: "hello@example.com".to_string(),
                website: None,
            },
            Address {
                street_number: "1".to_string(),
                street_name: "High Street".to_string(),
                unit: None,
                city: "London".to_string(),
                state: "Greater London".to_string(),
                postal_code: "EC1A 1AA".to_string(),
                country: "UK".to_string(),
            },
            self.geo_location,
            OperatingHours::every_day(TimeRange::new("11:00", "23:00")),
            Vec::new(),
        );
        for review in self.reviews {
            restaurant
                .add_review(review)
                .expect("factory reviews must have distinct authors");
        }
        if let Some(rating) = self.average_rating {
            restaurant.average_rating = rating;
        }
        restaurant
    }
}

pub fn restaurant_request(name: &str) -> RestaurantCreateUpdateRequest {
    RestaurantCreateUpdateRequest {
        name: name.to_string(),
        cuisine_type: "Italian".to_string(),
        contact_information: ContactInformation {
            phone: "+1 212 555 0100".to_string(),
            email: "info@example.com".to_string(),
            website: Some("https://example.com".to_string()),
        },
        address: Address {
            street_number: "10".to_string(),
            street_name: "Mulberry St".to_string(),
            unit: None,
            city: "New York".to_string(),
            state: "NY".to_string(),
            postal_code: "10013".to_string(),
            country: "US".to_string(),
        },
        operating_hours: OperatingHours::every_day(TimeRange::new("12:00", "22:00")),
        photo_ids: vec!["photos/front.jpg".to_string()],
    }
}

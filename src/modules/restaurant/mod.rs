pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::dto::{
    RestaurantCreateUpdateRequest, ReviewCreateUpdateRequest, ReviewPage, ReviewPageRequest,
};
pub use application::ports::{Clock, GeoLocationService, SystemClock};
pub use application::use_cases::{SearchRestaurantsHandler, SearchRestaurantsQuery};
pub use application::{RestaurantService, ReviewService};
pub use domain::{Author, Restaurant, RestaurantStore, Review};
pub use infrastructure::InMemoryRestaurantStore;

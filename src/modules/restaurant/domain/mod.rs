pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{
    Address, Author, ContactInformation, OperatingHours, Photo, Restaurant, Review, TimeRange,
};
pub use repositories::RestaurantStore;
pub use services::AggregateRatingCalculator;
pub use value_objects::{GeoLocation, ReviewSort, ReviewSortField, SearchCriteria, SortDirection};

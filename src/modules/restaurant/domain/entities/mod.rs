pub mod restaurant;
pub mod review;

pub use restaurant::{Address, ContactInformation, OperatingHours, Photo, Restaurant, TimeRange};
pub use review::{Author, Review};

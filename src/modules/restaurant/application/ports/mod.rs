pub mod clock;
pub mod geo_location_service;

pub use clock::{Clock, SystemClock};
pub use geo_location_service::GeoLocationService;

pub mod dto;
pub mod ports;
pub mod restaurant_service;
pub mod review_service;
pub mod use_cases;

pub use restaurant_service::RestaurantService;
pub use review_service::ReviewService;

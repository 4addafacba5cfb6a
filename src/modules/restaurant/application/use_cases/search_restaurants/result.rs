use crate::modules::restaurant::domain::Restaurant;
use crate::shared::application::pagination::PaginatedResult;

/// Result of searching restaurants (uses PaginatedResult from shared)
pub type SearchRestaurantsResult = PaginatedResult<Restaurant>;

pub mod search_restaurants;

pub use search_restaurants::{
    SearchRestaurantsHandler, SearchRestaurantsQuery, SearchRestaurantsResult,
};

mod handler;
mod query;
mod result;

pub use handler::SearchRestaurantsHandler;
pub use query::SearchRestaurantsQuery;
pub use result::SearchRestaurantsResult;

pub mod restaurant_store;

pub use restaurant_store::RestaurantStore;

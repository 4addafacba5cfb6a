pub mod persistence;

pub use persistence::InMemoryRestaurantStore;

pub mod in_memory_restaurant_store;
mod text_matcher;

pub use in_memory_restaurant_store::InMemoryRestaurantStore;

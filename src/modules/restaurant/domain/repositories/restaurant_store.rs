use crate::modules::restaurant::domain::entities::restaurant::Restaurant;
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::AppResult,
};
use async_trait::async_trait;

/// Port (interface) for restaurant persistence following Hexagonal Architecture
///
/// A restaurant is stored as one document with its reviews embedded, so
/// every write replaces the whole aggregate. Failures are reported as
/// `AppError::StorageError` and passed through by the services untouched.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>>;

    /// Upsert the entire aggregate, returning the persisted form
    async fn save(&self, restaurant: &Restaurant) -> AppResult<Restaurant>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Restaurants whose average rating is at least `min_rating`
    async fn find_by_min_rating(
        &self,
        min_rating: f32,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>>;

    /// Text match on name/cuisine combined with a rating floor
    async fn find_by_query_and_min_rating(
        &self,
        query: &str,
        min_rating: f32,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>>;

    /// Restaurants within `radius_km` of the given point
    async fn find_by_location_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>>;

    async fn find_all(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Restaurant>>;
}

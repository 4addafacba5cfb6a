/// Mockall doubles for the store port
use async_trait::async_trait;
use mockall::mock;
use tasteboard_lib::modules::restaurant::{domain::Restaurant, RestaurantStore};
use tasteboard_lib::shared::application::{PaginatedResult, PaginationParams};
use tasteboard_lib::shared::AppResult;

mock! {
    pub Store {}

    #[async_trait]
    impl RestaurantStore for Store {
        async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>>;
        async fn save(&self, restaurant: &Restaurant) -> AppResult<Restaurant>;
        async fn delete(&self, id: &str) -> AppResult<()>;
        async fn find_by_min_rating(
            &self,
            min_rating: f32,
            pagination: PaginationParams,
        ) -> AppResult<PaginatedResult<Restaurant>>;
        async fn find_by_query_and_min_rating(
            &self,
            query: &str,
            min_rating: f32,
            pagination: PaginationParams,
        ) -> AppResult<PaginatedResult<Restaurant>>;
        async fn find_by_location_near(
            &self,
            latitude: f64,
            longitude: f64,
            radius_km: f64,
            pagination: PaginationParams,
        ) -> AppResult<PaginatedResult<Restaurant>>;
        async fn find_all(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Restaurant>>;
    }
}

/// Search routing tests
///
/// The handler must pick exactly one store query per call. A mocked store
/// with no expectations set panics on any unexpected call, so each test
/// only arms the query it expects.
mod utils;

use mockall::predicate::{always, eq};
use std::sync::Arc;
use tasteboard_lib::modules::restaurant::{
    domain::Restaurant, SearchRestaurantsHandler, SearchRestaurantsQuery,
};
use tasteboard_lib::shared::application::{PaginatedResult, PaginationParams, Query};
use tasteboard_lib::shared::{AppError, ErrorKind};
use utils::factories::RestaurantFactory;
use utils::mocks::MockStore;

fn one_result(name: &str, pagination: &PaginationParams) -> PaginatedResult<Restaurant> {
    PaginatedResult::new(
        vec![RestaurantFactory::new().with_name(name).build()],
        1,
        pagination,
    )
}

fn handler(store: MockStore) -> SearchRestaurantsHandler {
    SearchRestaurantsHandler::new(Arc::new(store))
}

#[tokio::test]
async fn rating_without_text_uses_rating_query() {
    let pagination = PaginationParams::new(1, 20);
    let mut store = MockStore::new();
    store
        .expect_find_by_min_rating()
        .with(eq(4.0f32), eq(pagination))
        .times(1)
        .returning(|_, p| Ok(one_result("rated", &p)));

    let result = handler(store)
        .execute(SearchRestaurantsQuery::new(pagination).with_min_rating(4.0))
        .await
        .unwrap();

    assert_eq!(result.items[0].name, "rated");
}

#[tokio::test]
async fn text_with_rating_uses_text_query_only() {
    let pagination = PaginationParams::new(2, 10);
    let mut store = MockStore::new();
    store
        .expect_find_by_query_and_min_rating()
        .withf(|q, min, _| q == "sushi" && *min == 3.0)
        .times(1)
        .returning(|_, _, p| Ok(one_result("sushi bar", &p)));

    let result = handler(store)
        .execute(
            SearchRestaurantsQuery::new(pagination)
                .with_text("sushi")
                .with_min_rating(3.0),
        )
        .await
        .unwrap();

    assert_eq!(result.page, 2);
    assert_eq!(result.items[0].name, "sushi bar");
}

#[tokio::test]
async fn text_without_rating_defaults_floor_to_zero_and_ignores_geo() {
    let mut store = MockStore::new();
    store
        .expect_find_by_query_and_min_rating()
        .withf(|q, min, _| q == "ramen" && *min == 0.0)
        .times(1)
        .returning(|_, _, p| Ok(PaginatedResult::new(vec![], 0, &p)));

    handler(store)
        .execute(
            SearchRestaurantsQuery::new(PaginationParams::default())
                .with_text("  ramen ")
                .near(40.0, -73.9, 5.0),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn coordinates_and_radius_use_geo_query() {
    let mut store = MockStore::new();
    store
        .expect_find_by_location_near()
        .with(eq(40.0f64), eq(-73.9f64), eq(5.0f64), always())
        .times(1)
        .returning(|_, _, _, p| Ok(one_result("nearby", &p)));

    let result = handler(store)
        .execute(SearchRestaurantsQuery::new(PaginationParams::default()).near(40.0, -73.9, 5.0))
        .await
        .unwrap();

    assert_eq!(result.items[0].name, "nearby");
}

#[tokio::test]
async fn no_filters_lists_everything() {
    let mut store = MockStore::new();
    store
        .expect_find_all()
        .times(1)
        .returning(|p| Ok(one_result("anything", &p)));

    let result = handler(store)
        .execute(SearchRestaurantsQuery::new(PaginationParams::default()))
        .await
        .unwrap();

    assert_eq!(result.total_count, 1);
}

#[tokio::test]
async fn partial_geo_input_falls_back_to_list_all() {
    let mut store = MockStore::new();
    store
        .expect_find_all()
        .times(1)
        .returning(|p| Ok(PaginatedResult::new(vec![], 0, &p)));

    let mut query = SearchRestaurantsQuery::new(PaginationParams::default());
    query.latitude = Some(40.0);
    query.longitude = Some(-73.9);

    handler(store).execute(query).await.unwrap();
}

#[tokio::test]
async fn store_failures_pass_through_unchanged() {
    let mut store = MockStore::new();
    store
        .expect_find_all()
        .times(1)
        .returning(|_| Err(AppError::StorageError("index unavailable".to_string())));

    let err = handler(store)
        .execute(SearchRestaurantsQuery::new(PaginationParams::default()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(err.to_string(), "Storage error: index unavailable");
}

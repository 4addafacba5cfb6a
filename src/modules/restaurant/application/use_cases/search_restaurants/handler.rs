use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::restaurant::domain::{RestaurantStore, SearchCriteria};
use crate::shared::{
    application::use_case::Query, errors::AppResult, utils::logger::LogContext,
};

use super::{query::SearchRestaurantsQuery, result::SearchRestaurantsResult};

/// Query handler for searching restaurants
///
/// Picks one store query from the supplied filters and delegates to it; it
/// never filters results itself.
pub struct SearchRestaurantsHandler {
    store: Arc<dyn RestaurantStore>,
}

impl SearchRestaurantsHandler {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Query<SearchRestaurantsQuery, SearchRestaurantsResult> for SearchRestaurantsHandler {
    async fn execute(&self, query: SearchRestaurantsQuery) -> AppResult<SearchRestaurantsResult> {
        let criteria = query.criteria();
        let strategy = criteria.strategy_name();
        LogContext::search_operation(strategy, query.query.as_deref(), None);

        let page = match criteria {
            SearchCriteria::RatingOnly { min_rating } => {
                self.store
                    .find_by_min_rating(min_rating, query.pagination)
                    .await?
            }
            SearchCriteria::TextAndRating { text, min_rating } => {
                self.store
                    .find_by_query_and_min_rating(&text, min_rating, query.pagination)
                    .await?
            }
            SearchCriteria::GeoRadius {
                latitude,
                longitude,
                radius_km,
            } => {
                self.store
                    .find_by_location_near(latitude, longitude, radius_km, query.pagination)
                    .await?
            }
            SearchCriteria::All => self.store.find_all(query.pagination).await?,
        };

        LogContext::search_operation(strategy, query.query.as_deref(), Some(page.total_count));
        Ok(page)
    }
}

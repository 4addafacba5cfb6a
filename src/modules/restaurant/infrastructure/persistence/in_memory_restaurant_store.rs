use super::text_matcher::TextMatcher;
use crate::modules::restaurant::domain::{GeoLocation, Restaurant, RestaurantStore};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use tracing::debug;

/// Restaurant documents held in memory, keyed by id.
///
/// Each entry is a full copy of the aggregate: reads hand out clones and
/// `save` replaces the stored document wholesale, the same contract a
/// document database adapter has to honour.
#[derive(Debug, Default)]
pub struct InMemoryRestaurantStore {
    documents: DashMap<String, Restaurant>,
}

impl InMemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn snapshot(&self) -> Vec<Restaurant> {
        self.documents.iter().map(|entry| entry.value().clone()).collect()
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, restaurant: &Restaurant) -> AppResult<Restaurant> {
        self.documents
            .insert(restaurant.id.clone(), restaurant.clone());
        debug!(
            restaurant_id = %restaurant.id,
            reviews = restaurant.reviews.len(),
            "saved restaurant document"
        );
        Ok(restaurant.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.documents.remove(id);
        Ok(())
    }

    /// Highest rated first
    async fn find_by_min_rating(
        &self,
        min_rating: f32,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>> {
        let mut matches: Vec<Restaurant> = self
            .snapshot()
            .into_iter()
            .filter(|r| r.average_rating >= min_rating)
            .collect();
        matches.sort_by(|a, b| by_rating_desc(a, b).then_with(|| a.id.cmp(&b.id)));
        Ok(PaginatedResult::from_vec(matches, &pagination))
    }

    /// Most relevant first
    async fn find_by_query_and_min_rating(
        &self,
        query: &str,
        min_rating: f32,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>> {
        let matcher = TextMatcher::new(query);
        let mut scored: Vec<(f64, Restaurant)> = self
            .snapshot()
            .into_iter()
            .filter(|r| r.average_rating >= min_rating)
            .filter_map(|r| matcher.score(&r).map(|score| (score, r)))
            .collect();
        scored.sort_by(|(sa, a), (sb, b)| {
            sb.partial_cmp(sa)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        debug!(query, hits = scored.len(), "text query evaluated");
        let matches = scored.into_iter().map(|(_, r)| r).collect();
        Ok(PaginatedResult::from_vec(matches, &pagination))
    }

    /// Nearest first
    async fn find_by_location_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Restaurant>> {
        let origin = GeoLocation::new(latitude, longitude);
        let mut nearby: Vec<(f64, Restaurant)> = self
            .snapshot()
            .into_iter()
            .map(|r| (origin.distance_km(&r.geo_location), r))
            .filter(|(distance, _)| *distance <= radius_km)
            .collect();
        nearby.sort_by(|(da, a), (db, b)| {
            da.partial_cmp(db)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        let matches = nearby.into_iter().map(|(_, r)| r).collect();
        Ok(PaginatedResult::from_vec(matches, &pagination))
    }

    /// Alphabetical by name
    async fn find_all(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Restaurant>> {
        let mut all = self.snapshot();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(PaginatedResult::from_vec(all, &pagination))
    }
}

fn by_rating_desc(a: &Restaurant, b: &Restaurant) -> Ordering {
    b.average_rating
        .partial_cmp(&a.average_rating)
        .unwrap_or(Ordering::Equal)
}

use super::dto::RestaurantCreateUpdateRequest;
use super::ports::{Clock, GeoLocationService};
use super::use_cases::{SearchRestaurantsHandler, SearchRestaurantsQuery, SearchRestaurantsResult};
use crate::modules::restaurant::domain::{Photo, Restaurant, RestaurantStore};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, Validator};
use crate::shared::{AggregateLocks, AppConfig};
use crate::{log_debug, log_info};
use std::sync::Arc;
use std::time::Instant;

pub struct RestaurantService {
    store: Arc<dyn RestaurantStore>,
    geo_location: Arc<dyn GeoLocationService>,
    clock: Arc<dyn Clock>,
    locks: Arc<AggregateLocks>,
    search_handler: SearchRestaurantsHandler,
    config: AppConfig,
}

impl RestaurantService {
    pub fn new(
        store: Arc<dyn RestaurantStore>,
        geo_location: Arc<dyn GeoLocationService>,
        clock: Arc<dyn Clock>,
        locks: Arc<AggregateLocks>,
        config: AppConfig,
    ) -> Self {
        Self {
            search_handler: SearchRestaurantsHandler::new(Arc::clone(&store)),
            store,
            geo_location,
            clock,
            locks,
            config,
        }
    }

    pub async fn create_restaurant(&self, request: RestaurantCreateUpdateRequest) -> AppResult<Restaurant> {
        request.validate()?;

        let geo_location = self.geo_location.resolve(&request.address).await?;
        let photos = Photo::from_ids(&request.photo_ids, self.clock.now());

        let restaurant = Restaurant::new(
            request.name,
            request.cuisine_type,
            request.contact_information,
            request.address,
            geo_location,
            request.operating_hours,
            photos,
        );

        let saved = self.store.save(&restaurant).await?;
        log_info!("Created restaurant {} ({})", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_restaurant(&self, id: &str) -> AppResult<Option<Restaurant>> {
        LogContext::store_operation("find_by_id", id, None);
        let started = Instant::now();
        let restaurant = self.store.find_by_id(id).await?;
        LogContext::store_operation("find_by_id", id, Some(started.elapsed().as_millis() as u64));
        Ok(restaurant)
    }

    /// Replace the descriptive fields, re-resolving coordinates from the new
    /// address. Reviews and the average rating are left as they are.
    pub async fn update_restaurant(
        &self,
        id: &str,
        request: RestaurantCreateUpdateRequest,
    ) -> AppResult<Restaurant> {
        request.validate()?;
        let geo_location = self.geo_location.resolve(&request.address).await?;

        let _guard = self.locks.acquire(id).await;
        let mut restaurant = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::RestaurantNotFound(id.to_string()))?;

        restaurant.name = request.name;
        restaurant.cuisine_type = request.cuisine_type;
        restaurant.contact_information = request.contact_information;
        restaurant.address = request.address;
        restaurant.geo_location = geo_location;
        restaurant.operating_hours = request.operating_hours;
        restaurant.photos = Photo::from_ids(&request.photo_ids, self.clock.now());

        let saved = self.store.save(&restaurant).await?;
        log_debug!("Updated restaurant {}", id);
        Ok(saved)
    }

    pub async fn delete_restaurant(&self, id: &str) -> AppResult<()> {
        let _guard = self.locks.acquire(id).await;
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::RestaurantNotFound(id.to_string()));
        }
        self.store.delete(id).await?;
        log_info!("Deleted restaurant {}", id);
        Ok(())
    }

    /// Unfiltered search over the first page at the configured default size
    pub fn search_query(&self) -> SearchRestaurantsQuery {
        SearchRestaurantsQuery::new(self.config.first_page())
    }

    pub async fn search_restaurants(&self, query: SearchRestaurantsQuery) -> AppResult<SearchRestaurantsResult> {
        Validator::validate_page_size(query.pagination.limit(), self.config.max_page_size)?;
        self.search_handler.execute(query).await
    }
}

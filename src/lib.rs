pub mod modules;
pub mod shared;

use modules::restaurant::{
    Clock, GeoLocationService, InMemoryRestaurantStore, RestaurantService, RestaurantStore,
    ReviewService, SystemClock,
};
use shared::{utils::init_logger, AggregateLocks, AppConfig};
use std::sync::Arc;

/// Wired-up services sharing one store, clock and lock registry.
///
/// The restaurant and review services must share the same `AggregateLocks`
/// so a restaurant update and a review write never interleave.
pub struct AppServices {
    pub restaurants: Arc<RestaurantService>,
    pub reviews: Arc<ReviewService>,
    pub store: Arc<dyn RestaurantStore>,
    pub locks: Arc<AggregateLocks>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn RestaurantStore>,
        geo_location: Arc<dyn GeoLocationService>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        let locks = Arc::new(AggregateLocks::new());

        let restaurants = Arc::new(RestaurantService::new(
            Arc::clone(&store),
            geo_location,
            Arc::clone(&clock),
            Arc::clone(&locks),
            config.clone(),
        ));
        let reviews = Arc::new(ReviewService::new(
            Arc::clone(&store),
            clock,
            Arc::clone(&locks),
            config.clone(),
        ));

        log::info!(
            "Services initialized (edit window {}h, max page size {})",
            config.edit_window_hours,
            config.max_page_size
        );

        Self {
            restaurants,
            reviews,
            store,
            locks,
        }
    }

    /// Environment-configured services over an in-memory store and the system clock.
    pub fn in_memory(geo_location: Arc<dyn GeoLocationService>) -> Self {
        init_logger();
        Self::new(
            Arc::new(InMemoryRestaurantStore::new()),
            geo_location,
            Arc::new(SystemClock),
            AppConfig::from_env(),
        )
    }
}

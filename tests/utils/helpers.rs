/// Test helper functions and service builders
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};
use tasteboard_lib::modules::restaurant::{
    domain::{Address, GeoLocation, Restaurant},
    Clock, GeoLocationService, InMemoryRestaurantStore, RestaurantStore,
};
use tasteboard_lib::shared::{AppConfig, AppResult};
use tasteboard_lib::AppServices;

/// Clock that only moves when a test moves it
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Geocoder that places every address at the same point
pub struct StaticGeoLocation(pub GeoLocation);

#[async_trait]
impl GeoLocationService for StaticGeoLocation {
    async fn resolve(&self, _address: &Address) -> AppResult<GeoLocation> {
        Ok(self.0)
    }
}

pub struct TestServices {
    pub app: AppServices,
    pub store: Arc<InMemoryRestaurantStore>,
    pub clock: Arc<FixedClock>,
}

/// Build services over a fresh in-memory store with the clock at `now`
pub fn build_test_services(now: DateTime<Utc>) -> TestServices {
    let store = Arc::new(InMemoryRestaurantStore::new());
    let clock = Arc::new(FixedClock::at(now));
    let app = AppServices::new(
        store.clone(),
        Arc::new(StaticGeoLocation(GeoLocation::new(40.7209, -73.9973))),
        clock.clone(),
        AppConfig::default(),
    );
    TestServices { app, store, clock }
}

pub async fn seed(store: &InMemoryRestaurantStore, restaurant: &Restaurant) {
    store.save(restaurant).await.unwrap();
}

pub async fn reload(store: &InMemoryRestaurantStore, id: &str) -> Restaurant {
    store.find_by_id(id).await.unwrap().expect("restaurant should exist")
}

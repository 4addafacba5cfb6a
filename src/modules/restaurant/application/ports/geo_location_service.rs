use async_trait::async_trait;

use crate::modules::restaurant::domain::{Address, GeoLocation};
use crate::shared::errors::AppResult;

/// Port (interface) for turning a postal address into coordinates
/// Infrastructure layer implements this (geocoding API, fixed table, etc.)
#[async_trait]
pub trait GeoLocationService: Send + Sync {
    async fn resolve(&self, address: &Address) -> AppResult<GeoLocation>;
}

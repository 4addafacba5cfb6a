use crate::shared::errors::AppResult;
/// Base trait for query handlers
///
/// Each handler owns exactly one operation, following the Single
/// Responsibility Principle.
///
/// # Example
///
/// ```ignore
/// struct SearchRestaurantsHandler {
///     store: Arc<dyn RestaurantStore>,
/// }
///
/// #[async_trait]
/// impl Query<SearchRestaurantsQuery, SearchRestaurantsResult> for SearchRestaurantsHandler {
///     async fn execute(&self, query: SearchRestaurantsQuery) -> AppResult<SearchRestaurantsResult> {
///         // Route to a single store query here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}

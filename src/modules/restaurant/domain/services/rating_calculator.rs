use crate::modules::restaurant::domain::entities::review::Review;

/// Derives a restaurant's denormalised average rating from its reviews.
pub struct AggregateRatingCalculator;

impl AggregateRatingCalculator {
    /// Arithmetic mean of all review ratings, `0.0` when there are none.
    pub fn recompute(reviews: &[Review]) -> f32 {
        if reviews.is_empty() {
            return 0.0;
        }
        let sum: f64 = reviews.iter().map(|review| f64::from(review.rating)).sum();
        (sum / reviews.len() as f64) as f32
    }
}

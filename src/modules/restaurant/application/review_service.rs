use super::dto::{ReviewCreateUpdateRequest, ReviewPage, ReviewPageRequest};
use super::ports::Clock;
use crate::modules::restaurant::domain::{Author, Photo, Restaurant, RestaurantStore, Review, ReviewSort};
use crate::shared::errors::{AppError, AppResult, ReviewNotAllowed};
use crate::shared::utils::{LogContext, TimedOperation, Validator};
use crate::shared::{AggregateLocks, AppConfig};
use crate::{log_debug, log_warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Manages the reviews embedded in a restaurant aggregate.
///
/// Every mutation loads the restaurant, changes its review list in memory
/// and writes the whole document back while holding that restaurant's
/// lock, so concurrent writers cannot lose each other's reviews.
pub struct ReviewService {
    store: Arc<dyn RestaurantStore>,
    clock: Arc<dyn Clock>,
    locks: Arc<AggregateLocks>,
    config: AppConfig,
}

impl ReviewService {
    pub fn new(
        store: Arc<dyn RestaurantStore>,
        clock: Arc<dyn Clock>,
        locks: Arc<AggregateLocks>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            clock,
            locks,
            config,
        }
    }

    pub async fn create_review(
        &self,
        author: &Author,
        restaurant_id: &str,
        request: ReviewCreateUpdateRequest,
    ) -> AppResult<Review> {
        request.validate()?;
        let _guard = self.locks.acquire(restaurant_id).await;

        let mut restaurant = self.load(restaurant_id).await?;

        let now = self.clock.now();
        let photos = Photo::from_ids(&request.photo_ids, now);
        let review = Review::new(author.clone(), request.content, request.rating, photos, now);
        let review_id = review.id;

        if let Err(rejection) = restaurant.add_review(review) {
            log_debug!(
                "Author {} already reviewed restaurant {}",
                author.id,
                restaurant_id
            );
            return Err(rejection.into());
        }

        let saved = self.store.save(&restaurant).await?;
        LogContext::review_mutation("created", restaurant_id, &review_id.to_string(), saved.average_rating);

        saved.find_review(&review_id).cloned().ok_or_else(|| {
            AppError::InternalError(format!(
                "Created review {} not retrievable from restaurant {}",
                review_id, restaurant_id
            ))
        })
    }

    /// Opening window of reviews at the configured default page size
    pub fn first_page(&self, sort: Option<ReviewSort>) -> ReviewPageRequest {
        ReviewPageRequest::new(sort, 0, self.config.default_page_size)
    }

    /// Sort then slice the restaurant's reviews in memory.
    pub async fn get_reviews(
        &self,
        restaurant_id: &str,
        page: ReviewPageRequest,
    ) -> AppResult<ReviewPage> {
        Validator::validate_page_size(page.size, self.config.max_page_size)?;
        let timer = TimedOperation::new("get_reviews");

        let restaurant = self.load(restaurant_id).await?;
        let sorted = restaurant.sorted_reviews(page.sort.unwrap_or_default());
        let total_count = sorted.len();

        let items = if page.offset >= total_count {
            Vec::new()
        } else {
            let end = page.offset.saturating_add(page.size).min(total_count);
            sorted[page.offset..end].to_vec()
        };

        timer.finish_with_info(&format!("{} of {} reviews", items.len(), total_count));
        Ok(ReviewPage {
            items,
            total_count,
            offset: page.offset,
            size: page.size,
        })
    }

    /// A missing review is `None`; only a missing restaurant is an error.
    pub async fn get_review(&self, restaurant_id: &str, review_id: &Uuid) -> AppResult<Option<Review>> {
        let restaurant = self.load(restaurant_id).await?;
        Ok(restaurant.find_review(review_id).cloned())
    }

    pub async fn update_review(
        &self,
        author: &Author,
        restaurant_id: &str,
        review_id: &Uuid,
        request: ReviewCreateUpdateRequest,
    ) -> AppResult<Review> {
        request.validate()?;
        let _guard = self.locks.acquire(restaurant_id).await;

        let mut restaurant = self.load(restaurant_id).await?;

        let mut review = restaurant
            .find_review(review_id)
            .cloned()
            .ok_or(ReviewNotAllowed::ReviewMissing)?;

        if !review.is_written_by(author) {
            log_warn!(
                "Author {} attempted to edit review {} owned by {}",
                author.id,
                review_id,
                review.written_by.id
            );
            return Err(ReviewNotAllowed::NotAuthor.into());
        }

        let now = self.clock.now();
        if !review.is_editable_at(now, self.config.edit_window()) {
            return Err(ReviewNotAllowed::EditWindowExpired {
                window_hours: self.config.edit_window_hours,
            }
            .into());
        }

        let photos = Photo::from_ids(&request.photo_ids, now);
        review.apply_edit(request.content, request.rating, photos, now);
        restaurant.replace_review(review.clone())?;

        let saved = self.store.save(&restaurant).await?;
        LogContext::review_mutation("updated", restaurant_id, &review_id.to_string(), saved.average_rating);

        Ok(review)
    }

    /// Deleting a review that is not there still rewrites the aggregate and succeeds.
    pub async fn delete_review(&self, restaurant_id: &str, review_id: &Uuid) -> AppResult<()> {
        let _guard = self.locks.acquire(restaurant_id).await;

        let mut restaurant = self.load(restaurant_id).await?;
        if !restaurant.remove_review(review_id) {
            log_debug!(
                "Review {} not present on restaurant {}, nothing to delete",
                review_id,
                restaurant_id
            );
        }

        let saved = self.store.save(&restaurant).await?;
        LogContext::review_mutation("deleted", restaurant_id, &review_id.to_string(), saved.average_rating);
        Ok(())
    }

    async fn load(&self, restaurant_id: &str) -> AppResult<Restaurant> {
        LogContext::store_operation("find_by_id", restaurant_id, None);
        let started = Instant::now();
        let restaurant = self.store.find_by_id(restaurant_id).await?;
        LogContext::store_operation(
            "find_by_id",
            restaurant_id,
            Some(started.elapsed().as_millis() as u64),
        );
        restaurant.ok_or_else(|| AppError::RestaurantNotFound(restaurant_id.to_string()))
    }
}

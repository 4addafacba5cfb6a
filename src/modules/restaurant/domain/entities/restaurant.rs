use super::review::{Author, Review};
use crate::modules::restaurant::domain::services::rating_calculator::AggregateRatingCalculator;
use crate::modules::restaurant::domain::value_objects::{GeoLocation, ReviewSort};
use crate::shared::errors::ReviewNotAllowed;
use crate::shared::utils::Validator;
use crate::shared::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

impl Photo {
    /// Stamp every uploaded photo id with the same upload time.
    pub fn from_ids(photo_ids: &[String], uploaded_at: DateTime<Utc>) -> Vec<Photo> {
        photo_ids
            .iter()
            .map(|url| Photo {
                url: url.clone(),
                upload_date: uploaded_at,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub unit: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub open_time: String,
    pub close_time: String,
}

impl TimeRange {
    pub fn new(open_time: impl Into<String>, close_time: impl Into<String>) -> Self {
        Self {
            open_time: open_time.into(),
            close_time: close_time.into(),
        }
    }
}

/// Opening hours per weekday; `None` means closed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub monday: Option<TimeRange>,
    pub tuesday: Option<TimeRange>,
    pub wednesday: Option<TimeRange>,
    pub thursday: Option<TimeRange>,
    pub friday: Option<TimeRange>,
    pub saturday: Option<TimeRange>,
    pub sunday: Option<TimeRange>,
}

impl OperatingHours {
    /// Same hours every day of the week
    pub fn every_day(range: TimeRange) -> Self {
        Self {
            monday: Some(range.clone()),
            tuesday: Some(range.clone()),
            wednesday: Some(range.clone()),
            thursday: Some(range.clone()),
            friday: Some(range.clone()),
            saturday: Some(range.clone()),
            sunday: Some(range),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let days = [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ];
        for range in days.into_iter().flatten() {
            Validator::validate_time_of_day(&range.open_time)?;
            Validator::validate_time_of_day(&range.close_time)?;
        }
        Ok(())
    }
}

/// Restaurant aggregate root.
///
/// Reviews live inside the restaurant document and are only ever changed
/// through the methods below, which keep `average_rating` in step with the
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine_type: String,
    pub contact_information: ContactInformation,
    pub address: Address,
    pub geo_location: GeoLocation,
    pub operating_hours: OperatingHours,
    pub average_rating: f32,
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        cuisine_type: String,
        contact_information: ContactInformation,
        address: Address,
        geo_location: GeoLocation,
        operating_hours: OperatingHours,
        photos: Vec<Photo>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            cuisine_type,
            contact_information,
            address,
            geo_location,
            operating_hours,
            average_rating: 0.0,
            photos,
            reviews: Vec::new(),
        }
    }

    pub fn has_review_by(&self, author: &Author) -> bool {
        self.reviews.iter().any(|review| review.is_written_by(author))
    }

    pub fn find_review(&self, review_id: &Uuid) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == *review_id)
    }

    /// Append a review, refusing a second one from the same author.
    pub fn add_review(&mut self, review: Review) -> Result<(), ReviewNotAllowed> {
        if self.has_review_by(&review.written_by) {
            return Err(ReviewNotAllowed::DuplicateAuthor);
        }
        self.reviews.push(review);
        self.refresh_average_rating();
        Ok(())
    }

    /// Swap in an edited review, matching on id rather than position.
    pub fn replace_review(&mut self, updated: Review) -> Result<(), ReviewNotAllowed> {
        let slot = self
            .reviews
            .iter_mut()
            .find(|review| review.id == updated.id)
            .ok_or(ReviewNotAllowed::ReviewMissing)?;
        *slot = updated;
        self.refresh_average_rating();
        Ok(())
    }

    /// Remove a review if present. Returns whether anything was removed.
    pub fn remove_review(&mut self, review_id: &Uuid) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|review| review.id != *review_id);
        self.refresh_average_rating();
        self.reviews.len() < before
    }

    pub fn sorted_reviews(&self, sort: ReviewSort) -> Vec<Review> {
        let mut reviews = self.reviews.clone();
        reviews.sort_by(|a, b| sort.compare(a, b));
        reviews
    }

    pub fn refresh_average_rating(&mut self) {
        self.average_rating = AggregateRatingCalculator::recompute(&self.reviews);
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

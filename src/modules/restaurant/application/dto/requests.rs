use crate::modules::restaurant::domain::{
    Address, ContactInformation, OperatingHours, Review, ReviewSort,
};
use crate::shared::utils::Validator;
use crate::shared::AppResult;
use serde::{Deserialize, Serialize};

/// Body of a review create or edit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateUpdateRequest {
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl ReviewCreateUpdateRequest {
    pub fn new(content: impl Into<String>, rating: u8) -> Self {
        Self {
            content: content.into(),
            rating,
            photo_ids: Vec::new(),
        }
    }

    pub fn with_photo_ids(mut self, photo_ids: Vec<String>) -> Self {
        self.photo_ids = photo_ids;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_review_rating(self.rating)
    }
}

/// Body of a restaurant create or update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreateUpdateRequest {
    pub name: String,
    pub cuisine_type: String,
    pub contact_information: ContactInformation,
    pub address: Address,
    pub operating_hours: OperatingHours,
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl RestaurantCreateUpdateRequest {
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_restaurant_name(&self.name)?;
        self.operating_hours.validate()
    }
}

/// Window over a restaurant's reviews.
///
/// `sort: None` lists newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPageRequest {
    pub sort: Option<ReviewSort>,
    pub offset: usize,
    pub size: usize,
}

impl ReviewPageRequest {
    pub fn new(sort: Option<ReviewSort>, offset: usize, size: usize) -> Self {
        Self { sort, offset, size }
    }

    pub fn first(size: usize) -> Self {
        Self::new(None, 0, size)
    }
}

/// One page of reviews plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub items: Vec<Review>,
    pub total_count: usize,
    pub offset: usize,
    pub size: usize,
}

impl ReviewPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

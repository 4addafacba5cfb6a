use crate::modules::restaurant::domain::entities::review::Review;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewSortField {
    DatePosted,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering for a restaurant's review listing.
///
/// Reviews that tie on the primary key are ordered by id ascending, whatever
/// the direction, so a page always has the same contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub direction: SortDirection,
}

impl Default for ReviewSort {
    /// Newest first
    fn default() -> Self {
        Self {
            field: ReviewSortField::DatePosted,
            direction: SortDirection::Desc,
        }
    }
}

impl ReviewSort {
    pub fn new(field: ReviewSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn compare(&self, a: &Review, b: &Review) -> Ordering {
        let primary = match self.field {
            ReviewSortField::DatePosted => a.date_posted.cmp(&b.date_posted),
            ReviewSortField::Rating => a.rating.cmp(&b.rating),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for ReviewSortField {
    type Err = String;

    /// Unknown property names sort by post date, like the listing default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(ReviewSortField::Rating),
            _ => Ok(ReviewSortField::DatePosted),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction '{}'", other)),
        }
    }
}

impl FromStr for ReviewSort {
    type Err = String;

    /// Parses `field` or `field,direction` (e.g. `rating,asc`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim().parse::<ReviewSortField>()?;
        let direction = match parts.next() {
            Some(direction) => direction.trim().parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };
        Ok(Self { field, direction })
    }
}

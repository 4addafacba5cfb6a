use serde::{Deserialize, Serialize};

/// Which store query a restaurant search runs.
///
/// Exactly one variant is chosen per search, in this priority order:
/// rating filter without text, text (with a rating floor), geo radius, and
/// finally the unfiltered listing. Text searches never carry a geo filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum SearchCriteria {
    RatingOnly {
        min_rating: f32,
    },
    TextAndRating {
        text: String,
        min_rating: f32,
    },
    GeoRadius {
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    },
    All,
}

impl SearchCriteria {
    pub fn from_inputs(
        query: Option<&str>,
        min_rating: Option<f32>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_km: Option<f64>,
    ) -> Self {
        let text = query.map(str::trim).filter(|q| !q.is_empty());

        match (text, min_rating) {
            (None, Some(min_rating)) => SearchCriteria::RatingOnly { min_rating },
            (Some(text), min_rating) => SearchCriteria::TextAndRating {
                text: text.to_string(),
                min_rating: min_rating.unwrap_or(0.0),
            },
            (None, None) => match (latitude, longitude, radius_km) {
                (Some(latitude), Some(longitude), Some(radius_km)) => SearchCriteria::GeoRadius {
                    latitude,
                    longitude,
                    radius_km,
                },
                _ => SearchCriteria::All,
            },
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            SearchCriteria::RatingOnly { .. } => "rating-only",
            SearchCriteria::TextAndRating { .. } => "text-and-rating",
            SearchCriteria::GeoRadius { .. } => "geo-radius",
            SearchCriteria::All => "list-all",
        }
    }
}

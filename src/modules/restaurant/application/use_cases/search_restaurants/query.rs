use crate::modules::restaurant::domain::SearchCriteria;
use crate::shared::application::pagination::PaginationParams;

/// Query for searching restaurants; every filter is optional
#[derive(Debug, Clone, Default)]
pub struct SearchRestaurantsQuery {
    pub query: Option<String>,
    pub min_rating: Option<f32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Kilometres
    pub radius: Option<f64>,
    pub pagination: PaginationParams,
}

impl SearchRestaurantsQuery {
    pub fn new(pagination: PaginationParams) -> Self {
        Self {
            pagination,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn near(mut self, latitude: f64, longitude: f64, radius: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.radius = Some(radius);
        self
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::from_inputs(
            self.query.as_deref(),
            self.min_rating,
            self.latitude,
            self.longitude,
            self.radius,
        )
    }
}

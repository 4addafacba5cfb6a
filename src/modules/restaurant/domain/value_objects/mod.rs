mod geo_location;
mod review_sort;
mod search_criteria;

pub use geo_location::GeoLocation;
pub use review_sort::{ReviewSort, ReviewSortField, SortDirection};
pub use search_criteria::SearchCriteria;

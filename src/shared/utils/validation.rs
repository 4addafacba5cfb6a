use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

pub const MIN_REVIEW_RATING: u8 = 1;
pub const MAX_REVIEW_RATING: u8 = 5;

fn time_of_day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time-of-day pattern is valid")
    })
}

pub struct Validator;

impl Validator {
    pub fn validate_restaurant_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Restaurant name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Restaurant name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_rating(rating: u8) -> Result<(), AppError> {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&rating) {
            return Err(AppError::ValidationError(format!(
                "Rating must be between {} and {}",
                MIN_REVIEW_RATING, MAX_REVIEW_RATING
            )));
        }
        Ok(())
    }

    /// Opening and closing times use 24h `HH:MM` (leading zero optional).
    pub fn validate_time_of_day(value: &str) -> Result<(), AppError> {
        if !time_of_day_pattern().is_match(value) {
            return Err(AppError::ValidationError(format!(
                "Invalid time format '{}', expected HH:MM",
                value
            )));
        }
        Ok(())
    }

    pub fn validate_page_size(size: usize, max: usize) -> Result<(), AppError> {
        if size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if size > max {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                max
            )));
        }
        Ok(())
    }
}

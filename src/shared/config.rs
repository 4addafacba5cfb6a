use crate::log_warn;
use crate::shared::application::PaginationParams;
use chrono::Duration;
use std::env;
use std::str::FromStr;

const DEFAULT_EDIT_WINDOW_HOURS: i64 = 48;
const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Runtime settings for the review and search services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long after the original post an author may still edit a review
    pub edit_window_hours: i64,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edit_window_hours: DEFAULT_EDIT_WINDOW_HOURS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment (and `.env`, if present).
    ///
    /// Recognised variables: `REVIEW_EDIT_WINDOW_HOURS`, `DEFAULT_PAGE_SIZE`,
    /// `MAX_PAGE_SIZE`. Unparseable or non-positive values fall back to the
    /// defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            edit_window_hours: read_positive("REVIEW_EDIT_WINDOW_HOURS", defaults.edit_window_hours),
            default_page_size: read_positive("DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: read_positive("MAX_PAGE_SIZE", defaults.max_page_size),
        };

        if config.default_page_size > config.max_page_size {
            log_warn!(
                "DEFAULT_PAGE_SIZE ({}) exceeds MAX_PAGE_SIZE ({}), clamping",
                config.default_page_size,
                config.max_page_size
            );
            return Self {
                default_page_size: config.max_page_size,
                ..config
            };
        }

        config
    }

    pub fn edit_window(&self) -> Duration {
        Duration::hours(self.edit_window_hours)
    }

    /// First page at the configured default size
    pub fn first_page(&self) -> PaginationParams {
        PaginationParams::new(1, self.default_page_size as u32)
    }
}

fn read_positive<T>(key: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) if value > T::default() => value,
            _ => {
                log_warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

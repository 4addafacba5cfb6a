use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        // try_init: an embedding application may already own the global logger
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("tasteboard_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log store operations
    pub fn store_operation(operation: &str, restaurant_id: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => debug!(
                "Store: {} on restaurant {} completed in {}ms",
                operation, restaurant_id, duration
            ),
            None => debug!("Store: Starting {} on restaurant {}", operation, restaurant_id),
        }
    }

    /// Log a review mutation that changed the aggregate rating
    pub fn review_mutation(operation: &str, restaurant_id: &str, review_id: &str, average: f32) {
        info!(
            "Review: {} {} on restaurant {} (average rating now {:.2})",
            operation, review_id, restaurant_id, average
        );
    }

    /// Log search operations
    pub fn search_operation(strategy: &str, query: Option<&str>, results: Option<u64>) {
        match (query, results) {
            (Some(q), Some(r)) => info!("Search: '{}' via {} returned {} results", q, strategy, r),
            (Some(q), None) => debug!("Search: Starting '{}' via {}", q, strategy),
            (None, Some(r)) => info!("Search: {} returned {} results", strategy, r),
            (None, None) => debug!("Search: Starting {}", strategy),
        }
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}

// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven settings
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (locking)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::AggregateLocks;
pub use errors::{AppError, AppResult, ErrorKind, ReviewNotAllowed};

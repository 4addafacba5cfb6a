/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod aggregate_locks;

// Re-exports for convenience
pub use aggregate_locks::{AggregateGuard, AggregateLocks};

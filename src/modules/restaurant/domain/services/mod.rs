pub mod rating_calculator;

pub use rating_calculator::AggregateRatingCalculator;

pub mod aggregate;

pub use aggregate::{ComparisonType, FilterDefinition, FilterValue};

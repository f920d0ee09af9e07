pub mod aggregate;

pub use aggregate::{Collection, CollectionFilters, CollectionInfo, FilterCondition};

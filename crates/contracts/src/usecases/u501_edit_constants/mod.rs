pub mod filter_query;
pub mod request;

pub use filter_query::{to_additional_filters, FilterSelection, RangeBound, RangeInput};
pub use request::{AdditionalFilter, GetProductsForConstantsRequest, UpdateConstantsRequest};

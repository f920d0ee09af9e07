pub mod a001_collection;
pub mod a002_product;
pub mod a003_collection_filter;

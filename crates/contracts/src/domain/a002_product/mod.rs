pub mod aggregate;

pub use aggregate::{ProductCard, ProductDto, ProductPage};

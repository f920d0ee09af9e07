pub mod envelope;
pub mod ids;

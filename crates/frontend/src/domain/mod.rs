pub mod a001_collection;

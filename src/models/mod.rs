//! Data structures for personal contact records.

pub mod record;

pub use record::Record;

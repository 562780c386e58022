//! Controls where the names to render come from.

pub mod source;

pub use source::{CsvSource, CsvSourceConfig, NameSource};

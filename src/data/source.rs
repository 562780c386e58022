//! Contains implementations for different name sources.

mod csv;

pub use crate::data::source::csv::{CsvSource, CsvSourceConfig};
use crate::error::Result;

/// Supplies every name of a batch, in order.
pub trait NameSource {
    /// Reads the whole source eagerly. An empty source gives an empty list.
    fn load(&mut self) -> Result<Vec<String>>;
}

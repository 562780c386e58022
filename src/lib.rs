//! # gencerts
//!
//! Renders one certificate image per name: each name from a list is printed
//! onto a copy of a background PNG and saved under a file name derived from it.

#[cfg(feature = "cli")]
pub mod cli;
pub mod data;
pub mod error;
pub mod image;
pub mod logs;
pub mod output;
pub mod pipeline;
pub mod text;

pub use error::{Error, Result};

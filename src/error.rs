//! Common error types.

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// A shortcut type equivalent to `Result<T, gencerts::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    MissingOption(&'static str),
    MissingPath(&'static str, PathBuf),
    MissingOutputDir(PathBuf),
    UnknownColor(String),
    InvalidDelimiter(char),
    SourceOpen(PathBuf, String),
    RecordRead(String),
    FailedOpenImage(PathBuf, String),
    FailedWriteImage(PathBuf, String),
    FontconfigInit,
    LoadFontError(PathBuf),
    FontUndefined(String),
    InvalidCString(String),
    CairoError(String),
    LogWrite(String),
    #[cfg(feature = "cli")]
    ConfigOpen(PathBuf, String),
    #[cfg(feature = "cli")]
    ConfigDeser(PathBuf, String),
}

impl Error {
    pub fn missing_path(what: &'static str, path: impl AsRef<Path>) -> Self {
        Self::MissingPath(what, path.as_ref().to_path_buf())
    }

    pub fn source_open(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::SourceOpen(path.as_ref().to_path_buf(), e.to_string())
    }

    pub fn record_read(e: impl Display) -> Self {
        Self::RecordRead(e.to_string())
    }

    pub fn open_image(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::FailedOpenImage(path.as_ref().to_path_buf(), e.to_string())
    }

    pub fn write_image(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::FailedWriteImage(path.as_ref().to_path_buf(), e.to_string())
    }

    pub fn cairo(e: impl Display) -> Self {
        Self::CairoError(e.to_string())
    }

    pub fn log_write(e: impl Display) -> Self {
        Self::LogWrite(e.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn config_open(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::ConfigOpen(path.as_ref().to_path_buf(), e.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn config_deser(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::ConfigDeser(path.as_ref().to_path_buf(), e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingOption(opt) => write!(f, "Missing required option: --{opt}"),
            Error::MissingPath(what, p) => {
                write!(f, "The {what} \"{}\" does not exist", p.display())
            }
            Error::MissingOutputDir(p) => {
                write!(f, "Output directory \"{}\" does not exist", p.display())
            }
            Error::UnknownColor(name) => write!(
                f,
                "Invalid color name: \"{name}\". Use an SVG/CSS color keyword or #RRGGBB[AA]"
            ),
            Error::InvalidDelimiter(c) => {
                write!(f, "Invalid delimiter: {c:?}. The delimiter must be a single ASCII character")
            }
            Error::SourceOpen(p, e) => {
                write!(f, "Error opening names source \"{}\": {e}", p.display())
            }
            Error::RecordRead(e) => write!(f, "Error reading names source: {e}"),
            Error::FailedOpenImage(p, e) => {
                write!(f, "Error loading image file \"{}\": {e}", p.display())
            }
            Error::FailedWriteImage(p, e) => {
                write!(f, "Error writing image file \"{}\": {e}", p.display())
            }
            Error::FontconfigInit => write!(f, "Failed to initialize fontconfig"),
            Error::LoadFontError(p) => write!(f, "Error loading font file \"{}\"", p.display()),
            Error::FontUndefined(family) => write!(f, "No font found for family \"{family}\""),
            Error::InvalidCString(s) => write!(f, "Invalid C string: {s:?}"),
            Error::CairoError(e) => write!(f, "Cairo error: {e}"),
            Error::LogWrite(e) => write!(f, "Error writing progress output: {e}"),
            #[cfg(feature = "cli")]
            Error::ConfigOpen(p, e) => {
                write!(f, "Error opening config file \"{}\": {e}", p.display())
            }
            #[cfg(feature = "cli")]
            Error::ConfigDeser(p, e) => {
                write!(f, "Error parsing config file \"{}\": {e}", p.display())
            }
        }
    }
}

impl std::error::Error for Error {}

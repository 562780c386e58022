//! Contains implementation for CSV as name source.

use crate::data::NameSource;
use crate::error::{Error, Result};

use itertools::Itertools;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize, Copy, Clone, PartialEq)]
pub struct CsvSourceConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub header: bool,
}

fn default_delimiter() -> char {
    ','
}

impl Default for CsvSourceConfig {
    fn default() -> Self {
        CsvSourceConfig {
            delimiter: default_delimiter(),
            header: false,
        }
    }
}

impl CsvSourceConfig {
    /// Default config for a path, using tabs for `.tsv` files.
    pub fn infer(path: impl AsRef<Path>) -> Self {
        let ext = path.as_ref().extension().and_then(|e| e.to_str());
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => CsvSourceConfig {
                delimiter: '\t',
                ..Default::default()
            },
            _ => CsvSourceConfig::default(),
        }
    }

    /// The delimiter as the single byte the reader splits on.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(Error::InvalidDelimiter(self.delimiter))
    }
}

/// Reads names from delimited text. Every field of every record is a name.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    pub fn open(config: &CsvSourceConfig, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::source_open(path, e))?;
        Self::from_reader(config, file)
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(config: &CsvSourceConfig, rdr: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter_byte()?)
            .has_headers(config.header)
            .from_reader(rdr);
        Ok(Self { reader })
    }
}

impl<R: Read> NameSource for CsvSource<R> {
    fn load(&mut self) -> Result<Vec<String>> {
        self.reader
            .records()
            .map_ok(|record| record.iter().map(str::to_string).collect_vec())
            .flatten_ok()
            .map(|r| r.map_err(Error::record_read))
            .try_collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(config: CsvSourceConfig, data: &str) -> Result<Vec<String>> {
        CsvSource::from_reader(&config, data.as_bytes())?.load()
    }

    #[test]
    fn one_name_per_line() {
        let names = load(Default::default(), "Alice Jones\nBob Smith\nCharlie Brown\n").unwrap();
        assert_eq!(names, ["Alice Jones", "Bob Smith", "Charlie Brown"]);
    }

    #[test]
    fn every_field_is_a_name() {
        let names = load(Default::default(), "Alice,Bob\nCharlie,Dana\n").unwrap();
        assert_eq!(names, ["Alice", "Bob", "Charlie", "Dana"]);
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let names = load(Default::default(), "\"Jones, Alice\"\n\"Bob \"\"The Builder\"\"\"\n").unwrap();
        assert_eq!(names, ["Jones, Alice", "Bob \"The Builder\""]);
    }

    #[test]
    fn empty_source_is_empty() {
        assert!(load(Default::default(), "").unwrap().is_empty());
    }

    #[test]
    fn header_row_can_be_skipped() {
        let config = CsvSourceConfig {
            header: true,
            ..Default::default()
        };
        let names = load(config, "name\nAlice\nBob\n").unwrap();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn uneven_records_are_malformed() {
        let err = load(Default::default(), "Alice,Bob\nCharlie\n").unwrap_err();
        assert!(matches!(err, Error::RecordRead(_)));
    }

    #[test]
    fn tsv_uses_tabs() {
        let config = CsvSourceConfig::infer("names.TSV");
        assert_eq!(config.delimiter, '\t');
        let names = load(config, "Alice Jones\tBob, Jr.\n").unwrap();
        assert_eq!(names, ["Alice Jones", "Bob, Jr."]);
        assert_eq!(CsvSourceConfig::infer("names.csv"), CsvSourceConfig::default());
        assert_eq!(CsvSourceConfig::infer("names"), CsvSourceConfig::default());
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let config = CsvSourceConfig {
            delimiter: '\u{12C}',
            ..Default::default()
        };
        let err = load(config, "Jones, Alice\n").unwrap_err();
        assert!(matches!(err, Error::InvalidDelimiter('\u{12C}')));
        assert!(matches!(
            CsvSourceConfig { delimiter: 'é', ..Default::default() }.delimiter_byte(),
            Err(Error::InvalidDelimiter('é'))
        ));
        let config = CsvSourceConfig {
            delimiter: ';',
            ..Default::default()
        };
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(load(config, "Jones, Alice;Bob\n").unwrap(), ["Jones, Alice", "Bob"]);
    }

    #[test]
    fn open_rejects_non_ascii_delimiter() {
        let config = CsvSourceConfig {
            delimiter: '§',
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.csv");
        std::fs::write(&path, "Alice\n").unwrap();
        let result = CsvSource::open(&config, &path);
        assert!(matches!(result, Err(Error::InvalidDelimiter('§'))));
    }

    #[test]
    fn missing_file_fails_to_open() {
        let result = CsvSource::open(&Default::default(), "/nonexistent/names.csv");
        assert!(matches!(result, Err(Error::SourceOpen(..))));
    }
}

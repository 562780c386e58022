//! Optional configuration file and option resolution.

use crate::data::CsvSourceConfig;
use crate::error::{Error, Result};
use crate::image::{Color, ColorResolver, Placement};
use crate::pipeline::RenderConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options read from a TOML file. Any of them may be omitted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub names: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub center: Option<bool>,
    pub source: Option<CsvSourceConfig>,
}

impl Config {
    /// Reads a config file. Relative paths inside it are taken relative to
    /// the folder containing the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::config_open(path, e))?;
        let raw = Self::parse(&content).map_err(|e| Error::config_deser(path, e))?;
        let folder = path.parent().unwrap_or(Path::new("")).to_path_buf();
        Ok(Self {
            names: raw.names.map(|p| folder.join(p)),
            image: raw.image.map(|p| folder.join(p)),
            font: raw.font.map(|p| folder.join(p)),
            output: raw.output.map(|p| folder.join(p)),
            ..raw
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub names: PathBuf,
    pub image: PathBuf,
    pub font: PathBuf,
    pub output: PathBuf,
    pub size: f64,
    pub color: String,
    pub placement: Placement,
    pub source: CsvSourceConfig,
}

impl Settings {
    pub const DEFAULT_SIZE: f64 = 75.0;
    pub const DEFAULT_COLOR: &'static str = "black";

    /// Fails with the first input path or output folder that does not exist.
    pub fn check_paths(&self) -> Result<()> {
        let inputs = [
            ("names file", &self.names),
            ("image file", &self.image),
            ("font file", &self.font),
        ];
        for (what, path) in inputs {
            if !path.exists() {
                return Err(Error::missing_path(what, path));
            }
        }
        if !self.output.is_dir() {
            return Err(Error::MissingOutputDir(self.output.clone()));
        }
        Ok(())
    }

    pub fn color(&self, colors: &impl ColorResolver) -> Result<Color> {
        colors
            .resolve(&self.color)
            .ok_or_else(|| Error::UnknownColor(self.color.clone()))
    }

    pub fn render_config(&self, color: Color) -> RenderConfig {
        RenderConfig {
            size: self.size,
            color,
            placement: self.placement,
        }
    }
}

//! CLI implementation.
mod config;

pub use crate::cli::config::{Config, Settings};
use crate::data::{CsvSource, CsvSourceConfig, NameSource};
use crate::error::{Error, Result};
use crate::image::{NamedColors, Placement, Raster};
use crate::logs::{LogEvent, Logger};
use crate::output::OutputMap;
use crate::pipeline::Pipeline;
use crate::text::Font;

use clap::Parser;
use itertools::Itertools;
use std::path::PathBuf;

/// Print names from a list onto copies of a certificate image
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Names file (CSV or TSV); every field is a name
    #[arg(short, long)]
    pub names: Option<PathBuf>,

    /// Background image (PNG only)
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// TrueType or OpenType font file
    #[arg(short, long)]
    pub font: Option<PathBuf>,

    /// Output folder, which must already exist [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Font size in points [default: 75]
    #[arg(short, long)]
    pub size: Option<f64>,

    /// Font color, as a color name or #RRGGBB[AA] [default: black]
    #[arg(short, long)]
    pub color: Option<String>,

    /// Fraction of the image width where names start [default: 0.5]
    #[arg(long)]
    pub width: Option<f64>,

    /// Fraction of the image height, up from the bottom, for the baseline [default: 0.5]
    #[arg(long)]
    pub height: Option<f64>,

    /// Center names on the width fraction instead of starting there
    #[arg(long)]
    pub center: bool,

    /// Field delimiter of the names file [default: "," or tab for .tsv]
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Skip the first line of the names file
    #[arg(long)]
    pub header: bool,

    /// TOML file with default values for any of the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show what would be written without rendering anything
    #[arg(long)]
    pub dry_run: bool,
}

macro_rules! error {
    ($res:expr) => {
        $res.unwrap_or_else(|e| panic!("{e}"))
    };
}

impl Cli {
    pub fn run() {
        std::panic::set_hook(Box::new(|panic_info| {
            if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                eprintln!("{s}");
            } else {
                eprintln!("{panic_info}");
            }
        }));

        let cli = Self::parse();
        let config = error!(cli.find_config());
        let settings = error!(cli.settings(config));
        error!(settings.check_paths());
        error!(settings.source.delimiter_byte());
        let color = error!(settings.color(&NamedColors));

        let names =
            error!(CsvSource::open(&settings.source, &settings.names).and_then(|mut s| s.load()));
        let background = error!(Raster::open(&settings.image));
        let font = error!(Font::load(&settings.font));

        let mut pipeline = error!(Pipeline::new(
            settings.render_config(color),
            background,
            font,
            OutputMap::new(&settings.output),
            Logger::new_stdout(),
        ))
        .with_color_name(&settings.color);

        let plan = pipeline.plan(&names);
        for path in plan.iter().duplicates() {
            let msg = format!(
                "several names are written to {}, only the last one is kept",
                path.display()
            );
            error!(pipeline.visitor_mut().log(LogEvent::Warn(msg)));
        }

        if cli.dry_run {
            let summary = pipeline.summary(names.len());
            let mut logger = pipeline.into_visitor();
            error!(logger.summary(&summary));
            for path in plan {
                error!(logger.log(LogEvent::Info(format!("would write {}", path.display()))));
            }
            return;
        }

        error!(pipeline.run(&names));
    }

    fn find_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::open(path),
            None => Ok(Config::default()),
        }
    }

    /// Merges options: command line first, then config file, then defaults.
    pub fn settings(&self, config: Config) -> Result<Settings> {
        let names = self
            .names
            .clone()
            .or(config.names)
            .ok_or(Error::MissingOption("names"))?;
        let image = self
            .image
            .clone()
            .or(config.image)
            .ok_or(Error::MissingOption("image"))?;
        let font = self
            .font
            .clone()
            .or(config.font)
            .ok_or(Error::MissingOption("font"))?;

        let defaults = Placement::default();
        let placement = Placement {
            width: self.width.or(config.width).unwrap_or(defaults.width),
            height: self.height.or(config.height).unwrap_or(defaults.height),
            center: self.center || config.center.unwrap_or(defaults.center),
        };

        let mut source = config
            .source
            .unwrap_or_else(|| CsvSourceConfig::infer(&names));
        if let Some(delimiter) = self.delimiter {
            source.delimiter = delimiter;
        }
        source.header |= self.header;

        Ok(Settings {
            output: self
                .output
                .clone()
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(".")),
            size: self.size.or(config.size).unwrap_or(Settings::DEFAULT_SIZE),
            color: self
                .color
                .clone()
                .or(config.color)
                .unwrap_or_else(|| String::from(Settings::DEFAULT_COLOR)),
            names,
            image,
            font,
            placement,
            source,
        })
    }
}

//! Sequential batch rendering of names onto a background.

use crate::error::{Error, Result};
use crate::image::{self, Color, Placement, Raster};
use crate::output::OutputMap;
use crate::text::{Font, GlyphMetrics};

use std::path::{Path, PathBuf};

/// Rendering parameters shared by every name of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Font size in points, at 72 DPI.
    pub size: f64,
    pub color: Color,
    pub placement: Placement,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 75.0,
            color: Color::BLACK,
            placement: Placement::default(),
        }
    }
}

/// What a batch is about to do, reported before any rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub names: usize,
    pub width: i32,
    pub height: i32,
    pub config: RenderConfig,
    /// The color as the user wrote it, e.g. `black`.
    pub color_name: String,
}

/// Hooks into the progress of a batch. A hook that fails aborts the batch.
pub trait Visitor {
    fn on_start(&mut self, _summary: &Summary) -> Result<()> {
        Ok(())
    }
    fn on_saved(&mut self, _index: usize, _name: &str, _path: &Path) -> Result<()> {
        Ok(())
    }
    fn on_error(&mut self, _index: usize, _name: &str, _error: &Error) {}
    fn on_finish(&mut self, _result: &Result<usize>) -> Result<()> {
        Ok(())
    }
}

impl Visitor for () {}

pub struct Pipeline<V: Visitor> {
    config: RenderConfig,
    background: Raster,
    font: Font,
    metrics: GlyphMetrics,
    out_map: OutputMap,
    color_name: String,
    visitor: V,
}

impl<V: Visitor> Pipeline<V> {
    pub fn new(
        config: RenderConfig,
        background: Raster,
        font: Font,
        out_map: OutputMap,
        visitor: V,
    ) -> Result<Self> {
        let metrics = GlyphMetrics::new(&font)?;
        Ok(Self {
            color_name: config.color.to_string(),
            config,
            background,
            font,
            metrics,
            out_map,
            visitor,
        })
    }

    /// Name the summary reports for the text color instead of its hex form.
    pub fn with_color_name(mut self, name: impl Into<String>) -> Self {
        self.color_name = name.into();
        self
    }

    pub fn summary(&self, names: usize) -> Summary {
        let (width, height) = self.background.dimensions();
        Summary {
            names,
            width,
            height,
            config: self.config,
            color_name: self.color_name.clone(),
        }
    }

    /// Paths each name would be written to, in order.
    pub fn plan(&self, names: &[String]) -> Vec<PathBuf> {
        names.iter().map(|name| self.out_map.path(name)).collect()
    }

    /// Renders and writes one image per name, in order. Stops at the first
    /// failure, including a failing visitor; files written before it are kept.
    ///
    /// Returns how many files were written.
    pub fn run(&mut self, names: &[String]) -> Result<usize> {
        let summary = self.summary(names.len());
        self.visitor.on_start(&summary)?;
        let result = self.run_internal(names);
        let finished = self.visitor.on_finish(&result);
        let written = result?;
        finished?;
        Ok(written)
    }

    fn run_internal(&mut self, names: &[String]) -> Result<usize> {
        let mut written = 0;
        for (i, name) in names.iter().enumerate() {
            match self.process(name) {
                Ok(path) => {
                    written += 1;
                    self.visitor.on_saved(i, name, &path)?;
                }
                Err(e) => {
                    self.visitor.on_error(i, name, &e);
                    return Err(e);
                }
            }
        }
        Ok(written)
    }

    /// Renders a single name without writing it.
    pub fn render(&self, name: &str) -> Result<Raster> {
        let RenderConfig {
            size,
            color,
            placement,
        } = self.config;
        let (w, h) = self.background.dimensions();
        let text_width = self.metrics.width_of(name, size);
        let anchor = placement.anchor(w, h, text_width);
        image::render(&self.background, name, &self.font, size, color, anchor)
    }

    fn process(&self, name: &str) -> Result<PathBuf> {
        let img = self.render(name)?;
        let path = self.out_map.path(name);
        img.write(&path)?;
        Ok(path)
    }

    pub fn background(&self) -> &Raster {
        &self.background
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

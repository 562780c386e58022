//! PNG backed pixel buffers.

use crate::error::{Error, Result};
use crate::image::Color;

use cairo::{Context, Format, ImageSurface};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// An RGBA image held in a cairo surface.
#[derive(Debug)]
pub struct Raster {
    surface: ImageSurface,
}

impl Raster {
    pub fn from_surface(surface: ImageSurface) -> Self {
        Self { surface }
    }

    /// Creates a `width` by `height` image filled with `bg`.
    pub fn blank(bg: Color, width: i32, height: i32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width, height).map_err(Error::cairo)?;
        let cr = Context::new(&surface).map_err(Error::cairo)?;
        let (r, g, b, a) = bg.rgba();
        cr.set_source_rgba(r, g, b, a);
        cr.paint().map_err(Error::cairo)?;
        drop(cr);
        surface.flush();
        Ok(Self { surface })
    }

    pub fn open(fp: impl AsRef<Path>) -> Result<Self> {
        let fp = fp.as_ref();
        let mut reader = File::open(fp).map_err(|e| Error::open_image(fp, e))?;
        Self::read_png(&mut reader).map_err(|e| Error::open_image(fp, e))
    }

    pub fn read_png(reader: &mut impl Read) -> Result<Self> {
        ImageSurface::create_from_png(reader)
            .map(Self::from_surface)
            .map_err(Error::cairo)
    }

    /// Writes the image as PNG, replacing any existing file. The file is
    /// closed before returning, whether or not encoding succeeded.
    pub fn write(&self, fp: impl AsRef<Path>) -> Result<()> {
        let fp = fp.as_ref();
        let mut file = File::create(fp).map_err(|e| Error::write_image(fp, e))?;
        self.write_png(&mut file).map_err(|e| Error::write_image(fp, e))
    }

    pub fn write_png(&self, writer: &mut impl Write) -> Result<()> {
        self.surface.write_to_png(writer).map_err(Error::cairo)
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Straight (non premultiplied) RGBA value at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let format = self.surface.format();
        let offset = y as usize * self.surface.stride() as usize + x as usize * 4;
        let mut px = None;
        self.surface
            .with_data(|data| {
                px = data
                    .get(offset..offset + 4)
                    .map(|b| Self::decode(format, [b[0], b[1], b[2], b[3]]));
            })
            .ok()?;
        px
    }

    /// Whether both images have the same size and the same pixel values.
    pub fn same_pixels(&self, other: &Raster) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        let (w, h) = self.dimensions();
        (0..h).all(|y| (0..w).all(|x| self.pixel(x, y) == other.pixel(x, y)))
    }

    fn decode(format: Format, bytes: [u8; 4]) -> [u8; 4] {
        let v = u32::from_ne_bytes(bytes);
        let a = match format {
            Format::Rgb24 => 255,
            _ => (v >> 24) as u8,
        };
        let unmultiply = |c: u32| {
            let c = c & 0xFF;
            if a == 0 {
                0
            } else {
                ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
            }
        };
        [unmultiply(v >> 16), unmultiply(v >> 8), unmultiply(v), a]
    }
}

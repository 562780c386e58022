//! Text width measurement.

use crate::error::Result;
use crate::text::Font;

/// Converts pango units to whole pixels, rounding to nearest.
pub fn pixels(units: i32) -> i32 {
    (units + pango::SCALE / 2).div_euclid(pango::SCALE)
}

/// Measures text as the sum of each character's advance width.
///
/// Characters are laid out one at a time, so kerning between neighbours is not
/// taken into account. Advances are summed in pango units before rounding.
pub struct GlyphMetrics {
    layout: pango::Layout,
    font: pango::FontDescription,
}

impl GlyphMetrics {
    pub fn new(font: &Font) -> Result<Self> {
        Ok(Self {
            layout: font.layout(1.0)?,
            font: font.description(1.0),
        })
    }

    /// Width of `text` in pixels at `size` points.
    pub fn width_of(&self, text: &str, size: f64) -> i32 {
        pixels(self.units_of(text, size))
    }

    fn units_of(&self, text: &str, size: f64) -> i32 {
        let mut desc = self.font.clone();
        desc.set_absolute_size(size * pango::SCALE as f64);
        self.layout.set_font_description(Some(&desc));

        let mut buf = [0u8; 4];
        text.chars()
            .map(|ch| {
                self.layout.set_text(ch.encode_utf8(&mut buf));
                let (_, logical) = self.layout.extents();
                logical.width()
            })
            .sum()
    }
}

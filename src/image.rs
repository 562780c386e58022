//! Image loading and text compositing.

mod anchor;
mod color;
mod names;
mod raster;

pub use crate::image::anchor::{compute_anchor, Anchor, Placement};
pub use crate::image::color::{Color, ColorResolver, NamedColors};
pub use crate::image::raster::Raster;
use crate::error::{Error, Result};
use crate::text::Font;

use cairo::{Context, ImageSurface, Operator};

/// Produces a new image with `text` drawn over a copy of `background`.
///
/// The text baseline starts at `anchor`. Anything falling outside the image
/// is clipped. `background` is left untouched.
pub fn render(
    background: &Raster,
    text: &str,
    font: &Font,
    size: f64,
    color: Color,
    anchor: Anchor,
) -> Result<Raster> {
    let img = copy(background)?;
    print(&img, text, font, size, color, anchor)?;
    Ok(img)
}

/// Creates an independent copy of `src` with the same format and bounds.
pub fn copy(src: &Raster) -> Result<Raster> {
    let src = src.surface();
    let surface =
        ImageSurface::create(src.format(), src.width(), src.height()).map_err(Error::cairo)?;
    let cr = Context::new(&surface).map_err(Error::cairo)?;
    cr.set_operator(Operator::Source);
    cr.set_source_surface(src, 0.0, 0.0)
        .map_err(Error::cairo)?;
    cr.paint().map_err(Error::cairo)?;
    drop(cr);
    surface.flush();
    Ok(Raster::from_surface(surface))
}

/// Draws a single line of `text` in place, with a solid `color` fill.
pub fn print(
    img: &Raster,
    text: &str,
    font: &Font,
    size: f64,
    color: Color,
    anchor: Anchor,
) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let layout = font.layout(size)?;
    layout.set_text(text);

    let cr = Context::new(img.surface()).map_err(Error::cairo)?;
    let (r, g, b, a) = color.rgba();
    cr.set_source_rgba(r, g, b, a);
    cr.move_to(anchor.x as f64, anchor.y as f64);
    if let Some(line) = layout.line_readonly(0) {
        pangocairo::functions::show_layout_line(&cr, &line);
    }
    cr.status().map_err(Error::cairo)?;
    drop(cr);
    img.surface().flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{test_font, GlyphMetrics};

    fn white(w: i32, h: i32) -> Raster {
        Raster::blank(Color::from_rgb8(255, 255, 255), w, h).unwrap()
    }

    fn count_dark(img: &Raster) -> usize {
        let (w, h) = img.dimensions();
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| matches!(img.pixel(x, y), Some([r, _, _, _]) if r < 128))
            .count()
    }

    #[test]
    fn copy_is_identical_and_independent() {
        let bg = Raster::blank(Color::from_rgb8(12, 34, 56), 10, 10).unwrap();
        let dup = copy(&bg).unwrap();
        assert!(dup.same_pixels(&bg));
        assert_ne!(dup.surface().to_raw_none(), bg.surface().to_raw_none());
    }

    #[test]
    fn empty_text_keeps_background() {
        let Some(font) = test_font() else { return };
        let bg = Raster::blank(Color::from_rgb8(200, 180, 40), 64, 32).unwrap();
        let out = render(&bg, "", &font, 30.0, Color::BLACK, Anchor { x: 10, y: 20 }).unwrap();
        assert!(out.same_pixels(&bg));
    }

    #[test]
    fn text_is_drawn_above_baseline() {
        let Some(font) = test_font() else { return };
        let bg = white(200, 100);
        let out = render(&bg, "HHHH", &font, 40.0, Color::BLACK, Anchor { x: 20, y: 70 }).unwrap();

        assert!(count_dark(&out) > 0);
        // background untouched
        assert_eq!(count_dark(&bg), 0);
        // capitals sit on the baseline, nothing drawn well below it or left of the anchor
        for y in 80..100 {
            for x in 0..200 {
                assert_eq!(out.pixel(x, y), Some([255, 255, 255, 255]));
            }
        }
        for y in 0..100 {
            for x in 0..15 {
                assert_eq!(out.pixel(x, y), Some([255, 255, 255, 255]));
            }
        }
    }

    #[test]
    fn offscreen_text_is_clipped() {
        let Some(font) = test_font() else { return };
        let bg = white(50, 50);
        let out = render(&bg, "Far away", &font, 30.0, Color::BLACK, Anchor { x: 500, y: -500 })
            .unwrap();
        assert_eq!(out.dimensions(), (50, 50));
        assert!(out.same_pixels(&bg));
    }

    #[test]
    fn centered_text_straddles_the_anchor_fraction() {
        let Some(font) = test_font() else { return };
        let metrics = GlyphMetrics::new(&font).unwrap();
        let bg = white(400, 100);
        let placement = Placement {
            width: 0.5,
            height: 0.3,
            center: true,
        };
        let width = metrics.width_of("MMMM", 40.0);
        let anchor = placement.anchor(400, 100, width);
        let out = render(&bg, "MMMM", &font, 40.0, Color::BLACK, anchor).unwrap();

        let dark_columns: Vec<i32> = (0..400)
            .filter(|&x| (0..100).any(|y| matches!(out.pixel(x, y), Some([r, _, _, _]) if r < 128)))
            .collect();
        let (first, last) = (dark_columns[0], dark_columns[dark_columns.len() - 1]);
        assert!(first < 200 && last > 200);
        assert!((first + last - 400).abs() < 20);
    }
}

//! Font loading and text measurement.

mod font;
mod metrics;

pub use font::{Font, FontManager};
pub use metrics::{pixels, GlyphMetrics};

/// Environment variable that turns a missing system font into a test failure.
#[cfg(test)]
pub(crate) const REQUIRE_FONTS: &str = "GENCERTS_REQUIRE_FONTS";

/// An installed sans-serif font, or `None` with a notice on stderr.
///
/// Panics instead when `GENCERTS_REQUIRE_FONTS` is set, so a machine without
/// fonts cannot silently pass the rendering tests.
#[cfg(test)]
pub(crate) fn test_font() -> Option<Font> {
    match Font::from_family("sans-serif") {
        Ok(font) => Some(font),
        Err(e) if std::env::var_os(REQUIRE_FONTS).is_some() => {
            panic!("{REQUIRE_FONTS} is set but no font is available: {e}")
        }
        Err(e) => {
            eprintln!("skipped: no system font available ({e}); set {REQUIRE_FONTS} to fail instead");
            None
        }
    }
}

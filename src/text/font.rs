//! Management of font files and configuration

use crate::error::{Error, Result};

use fontconfig::{Fontconfig, Pattern};
use fontconfig_sys::fontconfig as sys;
use pango::prelude::FontMapExt;
use std::ffi::CString;
use std::path::{Path, PathBuf};

/// A font registered with fontconfig and ready to be used by pango.
pub struct Font {
    name: String,
    family: String,
    style: String,
    path: PathBuf,
    font_map: pango::FontMap,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("style", &self.style)
            .field("path", &self.path)
            .finish()
    }
}

impl Font {
    fn new(name: String, family: String, style: String, path: PathBuf) -> Self {
        // created after registration so the app font is visible to it
        let font_map = pangocairo::FontMap::new();
        Self {
            name,
            family,
            style,
            path,
            font_map,
        }
    }

    /// Loads a font file, e.g. a `.ttf`.
    pub fn load(fp: impl AsRef<Path>) -> Result<Self> {
        FontManager::new()?.load_font_from_file(fp)
    }

    /// Loads an installed font by family name, e.g. `"DejaVu Sans"`.
    pub fn from_family(family: &str) -> Result<Self> {
        FontManager::new()?.load_font_from_name(family, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pango description of this font at `size` pixels (points at 72 DPI).
    ///
    /// Only the style words go through pango's parser; the family is set as is,
    /// so a family ending in a number is not read as a size.
    pub fn description(&self, size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&format!("{} {size:.2}", self.style));
        desc.set_family(&self.family);
        desc.set_absolute_size(size * pango::SCALE as f64);
        desc
    }

    /// Creates a single line layout with hinting disabled.
    pub fn layout(&self, size: f64) -> Result<pango::Layout> {
        let ctx = self.font_map.create_context();
        let mut opt = cairo::FontOptions::new().map_err(Error::cairo)?;
        opt.set_antialias(cairo::Antialias::Good);
        opt.set_hint_style(cairo::HintStyle::None);
        opt.set_hint_metrics(cairo::HintMetrics::Off);
        pangocairo::functions::context_set_font_options(&ctx, Some(&opt));
        ctx.set_round_glyph_positions(false);

        let layout = pango::Layout::new(&ctx);
        layout.set_single_paragraph_mode(true);
        layout.set_font_description(Some(&self.description(size)));
        Ok(layout)
    }
}

pub struct FontManager {
    fc: Fontconfig,
}

impl FontManager {
    pub fn new() -> Result<Self> {
        Fontconfig::new()
            .map(|fc| Self { fc })
            .ok_or(Error::FontconfigInit)
    }

    pub fn load_font_from_name(&self, family: &str, style: Option<&str>) -> Result<Font> {
        let found = self
            .fc
            .find(family, style)
            .ok_or_else(|| Error::FontUndefined(family.to_string()))?;
        self.load_font_from_file(found.path)
    }

    pub fn load_font_from_file(&self, fp: impl AsRef<Path>) -> Result<Font> {
        let fp = fp.as_ref();
        let c_fp = CString::new(fp.to_string_lossy().to_string())
            .map_err(|_| Error::InvalidCString(fp.to_string_lossy().to_string()))?;
        let (name, family, style) = self
            .load_pattern_from_file(&c_fp)
            .and_then(|pat| {
                let family = pat.get_string(sys::constants::FC_FAMILY.as_cstr())?.to_string();
                let style = pat
                    .get_string(sys::constants::FC_STYLE.as_cstr())
                    .unwrap_or("")
                    .to_string();
                let name = pat.name().map_or_else(|| family.clone(), str::to_string);
                Some((name, family, style))
            })
            .ok_or_else(|| Error::LoadFontError(fp.to_path_buf()))?;

        let status = unsafe {
            sys::FcConfigAppFontAddFile(std::ptr::null_mut(), c_fp.as_ptr() as *const sys::FcChar8)
        };
        if status == 0 {
            Err(Error::LoadFontError(fp.to_path_buf()))
        } else {
            Ok(Font::new(name, family, style, fp.to_path_buf()))
        }
    }

    fn load_pattern_from_file(&self, c_fp: &CString) -> Option<Pattern<'_>> {
        unsafe {
            let set = sys::FcFontSetCreate();
            let status = sys::FcFileScan(
                set,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                c_fp.as_ptr() as *const sys::FcChar8,
                1,
            );
            let result = if status == 0 || (*set).nfont < 1 {
                None
            } else {
                let pat_ptr = *(*set).fonts;
                Some(Pattern::from_pattern(&self.fc, pat_ptr))
            };
            sys::FcFontSetDestroy(set);
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::test_font;

    #[test]
    fn missing_file_is_an_error() {
        let fm = match FontManager::new() {
            Ok(fm) => fm,
            Err(e) if std::env::var_os(crate::text::REQUIRE_FONTS).is_some() => panic!("{e}"),
            Err(e) => {
                eprintln!("skipped: {e}");
                return;
            }
        };
        let err = fm.load_font_from_file("/nonexistent/font.ttf").unwrap_err();
        assert!(matches!(err, Error::LoadFontError(_)));
    }

    #[test]
    fn description_uses_absolute_pixel_size() {
        let Some(font) = test_font() else { return };
        let desc = font.description(75.0);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 75 * pango::SCALE);
    }

    #[test]
    fn family_ending_in_a_number_is_kept_whole() {
        let font = Font::new(
            String::from("Code 128 Bold"),
            String::from("Code 128"),
            String::from("Bold"),
            PathBuf::from("code128.ttf"),
        );
        let desc = font.description(30.0);
        assert_eq!(desc.family().as_deref(), Some("Code 128"));
        assert_eq!(desc.weight(), pango::Weight::Bold);
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 30 * pango::SCALE);
    }

    #[test]
    fn unknown_style_words_do_not_change_the_family() {
        let font = Font::new(
            String::from("Great Vibes"),
            String::from("Great Vibes"),
            String::from("Regular Swash"),
            PathBuf::from("gv.ttf"),
        );
        let desc = font.description(12.0);
        assert_eq!(desc.family().as_deref(), Some("Great Vibes"));
        assert_eq!(desc.size(), 12 * pango::SCALE);
    }

    #[test]
    fn loaded_font_keeps_its_path() {
        let Some(font) = test_font() else { return };
        assert!(font.path().exists());
        assert!(!font.name().is_empty());
    }
}

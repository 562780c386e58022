//! Implements utilities to create color values.

use crate::image::names::SVG_COLORS;

use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: None,
    };

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: None,
        }
    }

    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a.unwrap_or(1.0))
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }
}

impl FromStr for Color {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re =
            Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
                .unwrap();

        let captures = re
            .captures(s)
            .ok_or("string not in form #RRGGBB or #RRGGBBAA")?;
        let channel = |i: usize| {
            captures
                .get(i)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
                .map(|v| v as f64 / 255.0)
        };
        Ok(Color {
            r: channel(1).unwrap_or(0.0),
            g: channel(2).unwrap_or(0.0),
            b: channel(3).unwrap_or(0.0),
            a: channel(4),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        let r = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
        if let Some(a) = a {
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        }
    }
}

/// Turns a user supplied color name into a concrete color.
pub trait ColorResolver {
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Resolves SVG 1.1 color keywords, case-insensitively, and falls back to
/// `#RRGGBB[AA]` notation.
#[derive(Debug, Default, Copy, Clone)]
pub struct NamedColors;

impl ColorResolver for NamedColors {
    fn resolve(&self, name: &str) -> Option<Color> {
        let key = name.trim().to_lowercase();
        if key.starts_with('#') {
            return key.parse().ok();
        }
        SVG_COLORS
            .binary_search_by(|(n, _)| n.cmp(&key.as_str()))
            .ok()
            .map(|i| {
                let [r, g, b] = SVG_COLORS[i].1;
                Color::from_rgb8(r, g, b)
            })
    }
}

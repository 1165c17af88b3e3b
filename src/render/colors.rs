use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use compact_str::CompactString;

/// Our color representation: straight RGBA in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            bail!("invalid hex color '{}': non-ASCII characters", hex);
        }
        let channel = |s: &str| -> Result<f32> {
            let v = u8::from_str_radix(s, 16)
                .with_context(|| format!("invalid hex color '{}'", hex))?;
            Ok(v as f32 / 255.0)
        };
        match digits.len() {
            3 => {
                let expand = |i: usize| digits[i..i + 1].repeat(2);
                Ok(Self::new(
                    channel(&expand(0))?,
                    channel(&expand(1))?,
                    channel(&expand(2))?,
                ))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            n => bail!("invalid hex color '{}': expected 3 or 6 digits, got {}", hex, n),
        }
    }

    /// Render as `#rrggbb` (alpha is dropped).
    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Explicit category → color mapping with a fallback for unknown categories.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<CompactString, Color>,
    default: Color,
}

impl Palette {
    pub fn new(default: Color) -> Self {
        Self {
            colors: HashMap::new(),
            default,
        }
    }

    pub fn with(mut self, category: &str, color: Color) -> Self {
        self.colors.insert(CompactString::new(category), color);
        self
    }

    /// Build a palette from `(category, hex)` pairs.
    pub fn from_hex_pairs<'a>(
        default: &str,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut palette = Self::new(Color::from_hex(default).context("default color")?);
        for (category, hex) in pairs {
            let color = Color::from_hex(hex)
                .with_context(|| format!("color for category '{}'", category))?;
            palette = palette.with(category, color);
        }
        Ok(palette)
    }

    /// Stock continent palette: pastel fills on a light background.
    pub fn continents() -> Self {
        Self::new(hex3(0xc, 0xc, 0xc))
            .with("Asia", hex6(0xff, 0x99, 0x99))
            .with("North America", hex6(0x99, 0xcc, 0xff))
            .with("South America", hex6(0xff, 0xcc, 0x99))
            .with("Africa", hex6(0x99, 0xff, 0x99))
            .with("Europe", hex6(0xcc, 0xcc, 0xff))
            .with("Europe/Asia", hex6(0xff, 0xcc, 0xff))
    }

    pub fn color_of(&self, category: &str) -> Color {
        self.colors.get(category).copied().unwrap_or(self.default)
    }

    pub fn default_color(&self) -> Color {
        self.default
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::continents()
    }
}

fn hex6(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

fn hex3(r: u8, g: u8, b: u8) -> Color {
    hex6(r * 17, g * 17, b * 17)
}

//! Theme configuration: palette, fonts and style profiles.
//!
//! A [`Theme`] is built once and passed by reference to everything that
//! styles text. All tables and fields default, so a TOML override only
//! needs the values it changes:
//!
//! ```toml
//! [palette]
//! emerald_600 = "#047857"
//!
//! [fonts]
//! body = "Inter"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Largest font size WordprocessingML accepts, in points
pub const MAX_FONT_SIZE: f32 = 1638.0;

/// A 24-bit RGB color, serialized as `"RRGGBB"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form without a leading `#`, as OOXML expects
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::invalid_color(s, "expected six hex digits"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| CoreError::invalid_color(s, e.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.hex()
    }
}

/// Named colors used across both documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub emerald_700: Rgb,
    pub emerald_600: Rgb,
    pub emerald_500: Rgb,
    pub emerald_400: Rgb,
    pub emerald_100: Rgb,
    pub emerald_50: Rgb,
    /// Soft green behind "info" callouts in the manual
    pub mint_50: Rgb,
    pub green_50: Rgb,

    pub slate_900: Rgb,
    pub slate_800: Rgb,
    pub slate_700: Rgb,
    pub slate_600: Rgb,
    pub slate_500: Rgb,
    pub slate_400: Rgb,
    pub slate_300: Rgb,
    pub slate_200: Rgb,
    pub slate_100: Rgb,
    pub slate_50: Rgb,
    pub white: Rgb,

    pub rose_600: Rgb,
    pub rose_500: Rgb,
    pub rose_100: Rgb,
    pub rose_50: Rgb,
    pub amber_600: Rgb,
    pub amber_500: Rgb,
    pub amber_100: Rgb,
    pub amber_50: Rgb,
    pub blue_500: Rgb,
    pub blue_100: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            emerald_700: Rgb::new(0x04, 0x7D, 0x57),
            emerald_600: Rgb::new(0x05, 0x96, 0x69),
            emerald_500: Rgb::new(0x10, 0xB9, 0x81),
            emerald_400: Rgb::new(0x34, 0xD3, 0x99),
            emerald_100: Rgb::new(0xD1, 0xFA, 0xE5),
            emerald_50: Rgb::new(0xEC, 0xFD, 0xF5),
            mint_50: Rgb::new(0xE6, 0xF7, 0xF0),
            green_50: Rgb::new(0xF0, 0xFD, 0xF4),

            slate_900: Rgb::new(0x0F, 0x17, 0x2A),
            slate_800: Rgb::new(0x1E, 0x29, 0x3B),
            slate_700: Rgb::new(0x33, 0x41, 0x55),
            slate_600: Rgb::new(0x47, 0x55, 0x69),
            slate_500: Rgb::new(0x64, 0x74, 0x8B),
            slate_400: Rgb::new(0x94, 0xA3, 0xB8),
            slate_300: Rgb::new(0xCB, 0xD5, 0xE1),
            slate_200: Rgb::new(0xE2, 0xE8, 0xF0),
            slate_100: Rgb::new(0xF1, 0xF5, 0xF9),
            slate_50: Rgb::new(0xF8, 0xFA, 0xFC),
            white: Rgb::new(0xFF, 0xFF, 0xFF),

            rose_600: Rgb::new(0xE1, 0x1D, 0x48),
            rose_500: Rgb::new(0xF4, 0x3F, 0x5E),
            rose_100: Rgb::new(0xFF, 0xE4, 0xE6),
            rose_50: Rgb::new(0xFF, 0xF1, 0xF2),
            amber_600: Rgb::new(0xD9, 0x77, 0x06),
            amber_500: Rgb::new(0xF5, 0x9E, 0x0B),
            amber_100: Rgb::new(0xFE, 0xF3, 0xC7),
            amber_50: Rgb::new(0xFF, 0xFB, 0xEB),
            blue_500: Rgb::new(0x3B, 0x82, 0xF6),
            blue_100: Rgb::new(0xDB, 0xEA, 0xFE),
        }
    }
}

/// Font families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub body: String,
    pub title: String,
    pub mono: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            body: "Segoe UI".to_string(),
            title: "Segoe UI".to_string(),
            mono: "Cascadia Code".to_string(),
        }
    }
}

/// Default visual attributes for text that carries no markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Font family
    pub font: String,
    /// Size in points
    pub size: f32,
    /// Text color
    pub color: Rgb,
}

impl StyleProfile {
    /// Create a profile
    pub fn new(font: impl Into<String>, size: f32, color: Rgb) -> Self {
        Self {
            font: font.into(),
            size,
            color,
        }
    }

    /// Same profile at another size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Same profile in another color
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Same profile in another family
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

/// Fully resolved attributes of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub font: String,
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
}

impl ResolvedStyle {
    /// Plain (upright, regular weight) style
    pub fn new(font: impl Into<String>, size: f32, color: Rgb) -> Self {
        Self {
            font: font.into(),
            size,
            color,
            bold: false,
            italic: false,
        }
    }

    /// Set the bold flag
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the italic flag
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

impl From<&StyleProfile> for ResolvedStyle {
    fn from(profile: &StyleProfile) -> Self {
        Self::new(profile.font.clone(), profile.size, profile.color)
    }
}

/// Style applied to inline code spans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeStyle {
    pub font: String,
    pub size: f32,
    pub color: Rgb,
}

/// Immutable styling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub fonts: Fonts,
    /// Color of `**bold**` spans
    pub emphasis: Rgb,
    /// Style of `` `code` `` spans
    pub code: CodeStyle,
    /// Running text
    pub body: StyleProfile,
    /// Text inside table cells and callouts
    pub compact: StyleProfile,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = Palette::default();
        let fonts = Fonts::default();
        Self {
            emphasis: palette.slate_900,
            code: CodeStyle {
                font: fonts.mono.clone(),
                size: 9.0,
                color: palette.emerald_600,
            },
            body: StyleProfile::new(fonts.body.clone(), 10.0, palette.slate_700),
            compact: StyleProfile::new(fonts.body.clone(), 9.5, palette.slate_700),
            palette,
            fonts,
        }
    }
}

impl Theme {
    /// Parse a theme from TOML, filling every missing value with its default
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(toml_str)?;
        theme.validate()?;
        debug!(body_font = %theme.fonts.body, emphasis = %theme.emphasis, "Theme loaded");
        Ok(theme)
    }

    /// Reject sizes no writer can express
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("body", self.body.size),
            ("compact", self.compact.size),
            ("code", self.code.size),
        ];
        for (profile, size) in sizes {
            if !size.is_finite() || size <= 0.0 || size > MAX_FONT_SIZE {
                return Err(CoreError::InvalidFontSize {
                    profile: profile.to_string(),
                    size,
                });
            }
        }
        Ok(())
    }

    /// Profile in the body family at an arbitrary size and color
    pub fn body_text(&self, size: f32, color: Rgb) -> StyleProfile {
        StyleProfile::new(self.fonts.body.clone(), size, color)
    }

    /// Profile in the title family at an arbitrary size and color
    pub fn title_text(&self, size: f32, color: Rgb) -> StyleProfile {
        StyleProfile::new(self.fonts.title.clone(), size, color)
    }
}

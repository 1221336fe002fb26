//! Named color palette with a current selection.
//!
//! ```
//! use simpil_text::Color;
//!
//! let mut color = Color::new();
//! color.red();
//! assert_eq!(color.hex().as_str(), "#ff0000");
//!
//! color.set_red("#cc0000").unwrap();
//! assert_eq!(color.hex().as_str(), "#cc0000");
//! ```

use std::fmt;

use indexmap::IndexMap;
use simpil_core::alloc::RandomState;

use crate::error::{TextError, TextResult};

/// A validated hex color: `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Validate `value` as a hex color.
    ///
    /// `key` only feeds the error message.
    pub fn parse(key: &str, value: &str) -> TextResult<Self> {
        let reject = |reason| TextError::InvalidColorValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| reject("must start with '#'"))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(reject("expected 6 (RRGGBB) or 8 (RRGGBBAA) hex digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(reject("contains a non-hexadecimal digit"));
        }
        Ok(Self(value.to_string()))
    }

    /// Seed colors are known-good literals.
    fn seed(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an alpha component is present.
    pub fn has_alpha(&self) -> bool {
        self.0.len() == 9
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const SEED: [(&str, &str); 5] = [
    ("black", "#000000"),
    ("red", "#ff0000"),
    ("white", "#ffffff"),
    ("blue", "#0000ff"),
    ("green", "#00ff00"),
];

/// A color palette plus the currently selected value.
#[derive(Debug, Clone)]
pub struct Color {
    colors: IndexMap<String, HexColor, RandomState>,
    color: HexColor,
}

macro_rules! named_colors {
    ($($name:ident, $setter:ident);* $(;)?) => {
        $(
            #[doc = concat!("Select the palette's `", stringify!($name), "` entry.")]
            pub fn $name(&mut self) -> &mut Self {
                // Seed entries are overwritten, never removed.
                self.color = self.colors[stringify!($name)].clone();
                self
            }

            #[doc = concat!("Replace the palette's `", stringify!($name), "` entry and select it.")]
            pub fn $setter(&mut self, value: &str) -> TextResult<&mut Self> {
                self.set_color(stringify!($name), value)?;
                self.$name();
                Ok(self)
            }
        )*
    };
}

impl Color {
    pub fn new() -> Self {
        let mut colors = IndexMap::with_capacity_and_hasher(SEED.len(), RandomState::new());
        for (name, hex) in SEED {
            colors.insert(name.to_string(), HexColor::seed(hex));
        }
        let color = colors["black"].clone();
        Self { colors, color }
    }

    /// Insert or overwrite a palette entry.
    ///
    /// Both arguments are validated before anything is written.
    pub fn set_color(&mut self, key: &str, value: &str) -> TextResult<&mut Self> {
        if key.is_empty() {
            return Err(TextError::InvalidColorValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: "color name must not be empty",
            });
        }
        let hex = HexColor::parse(key, value)?;
        self.colors.insert(key.to_string(), hex);
        Ok(self)
    }

    /// Select any palette entry by name.
    pub fn select(&mut self, name: &str) -> TextResult<&mut Self> {
        let hex = self
            .colors
            .get(name)
            .ok_or_else(|| TextError::InvalidColorValue {
                key: name.to_string(),
                value: String::new(),
                reason: "no such color in the palette",
            })?;
        self.color = hex.clone();
        Ok(self)
    }

    /// Select an arbitrary hex value without touching the palette.
    pub fn custom(&mut self, value: &str) -> TextResult<&mut Self> {
        self.color = HexColor::parse("custom", value)?;
        Ok(self)
    }

    named_colors! {
        black, set_black;
        red, set_red;
        white, set_white;
        blue, set_blue;
        green, set_green;
    }

    /// The currently selected color.
    pub fn hex(&self) -> &HexColor {
        &self.color
    }

    pub fn get(&self, name: &str) -> Option<&HexColor> {
        self.colors.get(name)
    }

    /// Palette entries in insertion order.
    pub fn palette(&self) -> impl Iterator<Item = (&str, &HexColor)> {
        self.colors.iter().map(|(name, hex)| (name.as_str(), hex))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

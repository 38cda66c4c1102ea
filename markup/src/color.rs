//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts::{HEX_PREFIX, MAX_HEX_DIGITS};
use crate::{MarkupError, MarkupResult};

/// A 24-bit RGB color with one byte per channel and no alpha.
///
/// `ColorRgb` is the unit of tinting for every glyph of a label. It converts to and from
/// a packed `0xRRGGBB` integer, where the most significant byte is red and the least
/// significant byte is blue.
///
/// # Examples
///
/// ```
/// use multicolor_markup::ColorRgb;
///
/// let orange = ColorRgb::from_u32(0xFF8000);
/// assert_eq!(orange, ColorRgb::new(255, 128, 0));
/// assert_eq!(orange.to_string(), "#ff8000");
/// assert_eq!("#FF8000".parse::<ColorRgb>().unwrap(), orange);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ColorRgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorRgb {
    /// Pure white, the default base color of a label.
    pub const WHITE: ColorRgb = ColorRgb::new(255, 255, 255);
    /// Pure black, the color of a hex code without any digits.
    pub const BLACK: ColorRgb = ColorRgb::new(0, 0, 0);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Splits the low 24 bits of `value` into red, green and blue.
    ///
    /// Bits above the 24th are ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value & 0xFF0000) >> 16) as u8,
            g: ((value & 0x00FF00) >> 8) as u8,
            b: (value & 0x0000FF) as u8,
        }
    }

    /// Packs the color into a `0xRRGGBB` integer.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Leniently reads a hex color code as it appears in a markup tag (without the `#`).
    ///
    /// Up to six leading ASCII hex digits are read as one integer and split into 24 bits.
    /// Reading stops at the first non-hex character. Missing digits are not padded, so
    /// `"F"` is `0x00000F` and an input with no leading hex digit at all is black.
    ///
    /// ```
    /// use multicolor_markup::ColorRgb;
    ///
    /// assert_eq!(ColorRgb::from_hex_code("FF0000"), ColorRgb::new(255, 0, 0));
    /// assert_eq!(ColorRgb::from_hex_code("F"), ColorRgb::new(0, 0, 15));
    /// assert_eq!(ColorRgb::from_hex_code("12zz"), ColorRgb::new(0, 0, 0x12));
    /// assert_eq!(ColorRgb::from_hex_code("xyz"), ColorRgb::BLACK);
    /// ```
    pub fn from_hex_code(code: &str) -> Self {
        let value = code
            .chars()
            .map_while(|ch| ch.to_digit(16))
            .take(MAX_HEX_DIGITS)
            .fold(0u32, |acc, digit| (acc << 4) | digit);
        Self::from_u32(value)
    }
}

impl From<(u8, u8, u8)> for ColorRgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<ColorRgb> for (u8, u8, u8) {
    fn from(color: ColorRgb) -> Self {
        (color.r, color.g, color.b)
    }
}

impl std::fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for ColorRgb {
    type Err = MarkupError;

    /// Strictly parses `#RRGGBB` or `RRGGBB`.
    ///
    /// Unlike [`ColorRgb::from_hex_code`], anything other than exactly six hex digits is
    /// rejected.
    fn from_str(s: &str) -> MarkupResult<Self> {
        let digits = s.strip_prefix(HEX_PREFIX).unwrap_or(s);
        if digits.len() != MAX_HEX_DIGITS {
            return Err(MarkupError::InvalidColor {
                value: s.to_string(),
                reason: "expected exactly 6 hex digits",
            });
        }
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(MarkupError::InvalidColor {
                value: s.to_string(),
                reason: "contains a non-hex character",
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| MarkupError::InvalidColor {
                value: s.to_string(),
                reason: "not a hex number",
            })
    }
}

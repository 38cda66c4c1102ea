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

//! The glyph renderer a label draws through.
//!
//! A renderer turns a plain string into one glyph per character, addressable by the
//! character's index. The label never creates or destroys glyphs itself, it only tints
//! them.

use multicolor_markup::ColorRgb;

/// A single rendered character whose tint can be changed.
pub trait Glyph {
    /// Sets the color the glyph is drawn with.
    fn set_tint(&mut self, color: ColorRgb);
}

/// Renders plain strings as a sequence of glyphs indexed by character position.
pub trait GlyphRenderer {
    /// The glyph type handed out by [`GlyphRenderer::glyph_mut`].
    type Glyph: Glyph;

    /// Replaces all glyphs with one glyph per character of `text`.
    fn render(&mut self, text: &str);

    /// Number of glyphs currently rendered.
    fn glyph_count(&self) -> usize;

    /// The glyph for character `index`, or `None` if out of range.
    fn glyph_mut(&mut self, index: usize) -> Option<&mut Self::Glyph>;
}

/// A character and the tint it is drawn with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TintedGlyph {
    /// The rendered character
    pub ch: char,
    /// Current tint
    pub tint: ColorRgb,
}

impl Glyph for TintedGlyph {
    fn set_tint(&mut self, color: ColorRgb) {
        self.tint = color;
    }
}

/// In-memory glyph renderer.
///
/// Keeps glyphs as an ordered `Vec`, one per character, freshly tinted white on every
/// render. Useful as a model for real renderers, for tests, and for writing tinted text
/// to a terminal.
///
/// # Examples
///
/// ```rust
/// # use multicolor_label::{GlyphBuffer, GlyphRenderer};
/// let mut buffer = GlyphBuffer::new();
/// buffer.render("abc");
/// assert_eq!(buffer.glyph_count(), 3);
/// assert_eq!(buffer.text(), "abc");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlyphBuffer {
    glyphs: Vec<TintedGlyph>,
}

impl GlyphBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// All glyphs in character order.
    pub fn glyphs(&self) -> &[TintedGlyph] {
        &self.glyphs
    }

    /// The rendered text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|glyph| glyph.ch).collect()
    }

    /// The tint of glyph `index`.
    pub fn tint_at(&self, index: usize) -> Option<ColorRgb> {
        self.glyphs.get(index).map(|glyph| glyph.tint)
    }

    /// Tints of all glyphs in character order.
    pub fn tints(&self) -> Vec<ColorRgb> {
        self.glyphs.iter().map(|glyph| glyph.tint).collect()
    }
}

impl GlyphRenderer for GlyphBuffer {
    type Glyph = TintedGlyph;

    fn render(&mut self, text: &str) {
        self.glyphs.clear();
        self.glyphs.extend(text.chars().map(|ch| TintedGlyph {
            ch,
            tint: ColorRgb::WHITE,
        }));
    }

    fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    fn glyph_mut(&mut self, index: usize) -> Option<&mut TintedGlyph> {
        self.glyphs.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_glyphs() {
        let mut buffer = GlyphBuffer::new();
        buffer.render("long text");
        buffer.render("ab");
        assert_eq!(buffer.glyph_count(), 2);
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_render_one_glyph_per_char() {
        let mut buffer = GlyphBuffer::new();
        buffer.render("añb");
        assert_eq!(buffer.glyph_count(), 3);
        assert_eq!(buffer.glyphs()[1].ch, 'ñ');
    }

    #[test]
    fn test_set_tint() {
        let mut buffer = GlyphBuffer::new();
        buffer.render("xy");
        buffer.glyph_mut(1).unwrap().set_tint(ColorRgb::BLACK);
        assert_eq!(buffer.tints(), vec![ColorRgb::WHITE, ColorRgb::BLACK]);
        assert_eq!(buffer.tint_at(2), None);
    }

    #[test]
    fn test_glyph_out_of_range() {
        let mut buffer = GlyphBuffer::new();
        buffer.render("x");
        assert!(buffer.glyph_mut(1).is_none());
    }
}

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

use crate::{Glyph, GlyphRenderer, LabelConfig, LabelError, LabelResult};
use multicolor_markup::{ColorMap, ColorRgb, ColoredSpan, ParseResult, parse};
use tracing::{debug, instrument, warn};

/// A text label whose characters are colored by inline markup.
///
/// The label owns its color map, the markup source it was last given and the parse of
/// that source. Glyphs belong to the renderer; the label addresses them by character
/// index of the plain string.
///
/// Glyphs outside of any colored span are tinted with the base color. Whenever the base
/// color changes the spans are painted again on top, so they keep their own colors.
///
/// # Examples
///
/// ```rust
/// # use multicolor_label::{GlyphBuffer, MulticolorLabel};
/// # use multicolor_markup::{ColorMap, ColorRgb};
/// let mut colors = ColorMap::with_base(ColorRgb::WHITE);
/// colors.insert("red", ColorRgb::new(255, 0, 0));
///
/// let mut label = MulticolorLabel::with_color_map(GlyphBuffer::new(), "a$red<b>c", colors)?;
/// assert_eq!(label.string(), "abc");
///
/// label.set_color(ColorRgb::BLACK)?;
/// assert_eq!(
///     label.renderer().tints(),
///     vec![ColorRgb::BLACK, ColorRgb::new(255, 0, 0), ColorRgb::BLACK]
/// );
/// # Ok::<(), multicolor_label::LabelError>(())
/// ```
#[derive(Debug)]
pub struct MulticolorLabel<R: GlyphRenderer> {
    renderer: R,
    /// Tint of glyphs not covered by a span
    color: ColorRgb,
    colors: ColorMap,
    /// Markup last handed to the label, kept verbatim for re-parsing
    source: String,
    parsed: ParseResult,
}

impl<R: GlyphRenderer> MulticolorLabel<R> {
    /// Creates a label with a white base color and no named colors.
    pub fn new(renderer: R, text: &str) -> LabelResult<Self> {
        Self::with_color_map(renderer, text, ColorMap::with_base(ColorRgb::WHITE))
    }

    /// Creates a label resolving named tags against `colors`.
    ///
    /// The base color is taken from the map's base entry, or white if there is none.
    pub fn with_color_map(renderer: R, text: &str, colors: ColorMap) -> LabelResult<Self> {
        Self::from_parts(renderer, ColorRgb::WHITE, colors, text)
    }

    /// Creates a label from a [`LabelConfig`].
    ///
    /// The configured base color is written into the color map unless the map already
    /// has a base entry, in which case the map's entry wins.
    pub fn with_config(renderer: R, text: &str, config: &LabelConfig) -> LabelResult<Self> {
        let mut colors = config.colors.clone();
        if colors.base().is_none() {
            colors.set_base(config.color);
        }
        Self::from_parts(renderer, config.color, colors, text)
    }

    fn from_parts(
        renderer: R,
        color: ColorRgb,
        colors: ColorMap,
        text: &str,
    ) -> LabelResult<Self> {
        let mut label = Self {
            renderer,
            color,
            colors,
            source: String::new(),
            parsed: ParseResult::default(),
        };
        label.set_colored_string(text)?;
        Ok(label)
    }

    // ===== Text =====

    /// Sets new markup text.
    ///
    /// The markup is parsed against the current color map, the plain string is rendered,
    /// the base color entry (if any) becomes the label's base color and finally every span
    /// is painted over its glyphs.
    #[instrument(skip_all)]
    pub fn set_colored_string(&mut self, text: &str) -> LabelResult<()> {
        let parsed = parse(text, &self.colors);
        debug!(
            glyphs = parsed.glyph_count(),
            spans = parsed.spans().len(),
            "parsed markup"
        );
        self.renderer.render(parsed.plain());
        self.source.clear();
        self.source.push_str(text);
        self.parsed = parsed;
        if let Some(base) = self.colors.base() {
            self.color = base;
        }
        self.apply_colors()
    }

    /// Sets text that is displayed verbatim, without interpreting markup.
    ///
    /// All spans are cleared and every glyph gets the base color. The text still replaces
    /// the retained source, so a later [`refresh`](Self::refresh) parses it as markup.
    #[instrument(skip_all)]
    pub fn set_string(&mut self, text: &str) -> LabelResult<()> {
        self.renderer.render(text);
        self.source.clear();
        self.source.push_str(text);
        self.parsed = ParseResult::from_plain(text);
        self.colors.set_base(self.color);
        self.apply_colors()
    }

    /// Parses the retained source again.
    ///
    /// Use this after changing the color map, so named tags pick up the new values.
    /// Refreshing twice without touching the map yields the same plain string and spans.
    #[doc(alias = "reparse")]
    pub fn refresh(&mut self) -> LabelResult<()> {
        let source = self.source.clone();
        self.set_colored_string(&source)
    }

    /// Same as [`refresh`](Self::refresh).
    pub fn unformat(&mut self) -> LabelResult<()> {
        self.refresh()
    }

    /// The plain string the renderer shows.
    pub fn string(&self) -> &str {
        self.parsed.plain()
    }

    /// The text last given to the label, markup included.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Spans currently painted over the base color.
    pub fn spans(&self) -> &[ColoredSpan] {
        self.parsed.spans()
    }

    /// The full result of the last parse.
    pub fn parse_result(&self) -> &ParseResult {
        &self.parsed
    }

    // ===== Colors =====

    /// The base color.
    pub fn color(&self) -> ColorRgb {
        self.color
    }

    /// Changes the base color.
    ///
    /// The color map's base entry is updated, every glyph is tinted with `color`, then
    /// every span is painted again with its own color.
    pub fn set_color(&mut self, color: ColorRgb) -> LabelResult<()> {
        self.color = color;
        self.colors.set_base(color);
        self.apply_colors()
    }

    /// The named colors.
    pub fn color_map(&self) -> &ColorMap {
        &self.colors
    }

    /// Mutable access to the named colors.
    ///
    /// Changes take effect on the next [`refresh`](Self::refresh) or text change.
    pub fn color_map_mut(&mut self) -> &mut ColorMap {
        &mut self.colors
    }

    /// Adds or replaces a named color; see [`color_map_mut`](Self::color_map_mut).
    pub fn set_named_color(
        &mut self,
        name: impl Into<String>,
        color: ColorRgb,
    ) -> Option<ColorRgb> {
        self.colors.insert(name, color)
    }

    // ===== Renderer =====

    /// The glyph renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the glyph renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the label, returning the glyph renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Tints every glyph with the base color, then paints every span.
    ///
    /// A span left open at the end of the input ends one past the last character; that
    /// extra index is never looked up.
    fn apply_colors(&mut self) -> LabelResult<()> {
        for index in 0..self.renderer.glyph_count() {
            Self::tint(&mut self.renderer, index, self.color)?;
        }
        let glyph_count = self.parsed.glyph_count();
        for span in self.parsed.spans() {
            for index in span.start..span.end.min(glyph_count) {
                Self::tint(&mut self.renderer, index, span.color)?;
            }
        }
        Ok(())
    }

    fn tint(renderer: &mut R, index: usize, color: ColorRgb) -> LabelResult<()> {
        let glyph_count = renderer.glyph_count();
        match renderer.glyph_mut(index) {
            Some(glyph) => {
                glyph.set_tint(color);
                Ok(())
            }
            None => {
                warn!(index, glyph_count, "glyph index out of range");
                Err(LabelError::GlyphOutOfRange { index, glyph_count })
            }
        }
    }
}

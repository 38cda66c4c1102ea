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

//! Single-pass scanner for inline color markup.
//!
//! # Syntax
//!
//! - `$name<text>` colors `text` with the color map entry `name`.
//! - `$#RRGGBB<text>` colors `text` with a hex color code.
//! - `$$` is a literal `$`.
//! - Inside a tag body `>>` is a literal `>`; outside a body `>` has no meaning.
//!
//! The scanner never fails. A `$` without a following `<` consumes one character and the
//! rest is scanned as text, unknown color names open a span that is dropped when it
//! closes, and a body still open at the end of input is closed one past the last plain
//! character.

use crate::consts::{FORMAT_INTRODUCER, TAG_CLOSE, TAG_OPEN};
use crate::{ColorMap, ColorRgb, resolve};
use std::ops::Range;
use tracing::{debug, trace};

/// A run of plain-text characters sharing one color.
///
/// Indices are half-open and count characters of the plain (markup-free) string, which
/// is also the glyph index space of a rendered label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ColoredSpan {
    /// First covered character index
    pub start: usize,
    /// One past the last covered character index
    pub end: usize,
    /// Color of every covered character
    pub color: ColorRgb,
}

impl ColoredSpan {
    /// Creates a new span.
    pub const fn new(start: usize, end: usize, color: ColorRgb) -> Self {
        Self { start, end, color }
    }

    /// The covered index range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of covered indices, zero for empty or inverted spans.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no index is covered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` falls inside the span.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Output of [`parse`]: the plain string and the spans coloring it, in scan order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseResult {
    plain: String,
    glyph_count: usize,
    spans: Vec<ColoredSpan>,
}

impl ParseResult {
    /// Wraps text that is displayed verbatim, without any spans.
    pub fn from_plain(text: impl Into<String>) -> Self {
        let plain = text.into();
        Self {
            glyph_count: plain.chars().count(),
            plain,
            spans: Vec::new(),
        }
    }

    /// The markup-free string handed to the glyph renderer.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Number of characters (and therefore glyphs) in the plain string.
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Colored spans in left-to-right order.
    pub fn spans(&self) -> &[ColoredSpan] {
        &self.spans
    }

    /// Returns `true` if nothing is colored by markup.
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// The span color covering plain character `index`, if any.
    pub fn color_at(&self, index: usize) -> Option<ColorRgb> {
        self.spans
            .iter()
            .find(|span| span.contains(index))
            .map(|span| span.color)
    }

    /// Splits the result into the plain string and its spans.
    pub fn into_parts(self) -> (String, Vec<ColoredSpan>) {
        (self.plain, self.spans)
    }
}

/// Parses `raw` markup against `colors`.
///
/// The input is scanned once, left to right. Markup characters are consumed without being
/// copied, every other character is appended to the plain string, and each tag body that
/// is closed with a resolved color becomes one [`ColoredSpan`].
///
/// # Markup Format
///
/// - `$name<text>`: `text` colored with the color map entry `name` (case-sensitive)
/// - `$#RRGGBB<text>`: `text` colored with up to six hex digits; fewer digits are read
///   as a smaller number, so `$#F<x>` is `(0, 0, 15)`
/// - `$$`: a literal `$`
/// - `>>` inside a tag body: a literal `>`; outside a body `>` and `<` are plain text
///
/// # Arguments
///
/// * `raw` - The markup string
/// * `colors` - Named colors used to resolve `$name<` tags
///
/// # Returns
///
/// A [`ParseResult`] holding the plain string and its spans in scan order. Spans never
/// overlap: a tag found inside an open body closes that body first.
///
/// # Malformed Input
///
/// Parsing never fails:
/// - an unknown color name still opens a body, which is dropped when it closes
/// - a `$` with no `<` after it consumes only the character following it
/// - `$<` at the very end of the input emits `<`; a trailing `$` is dropped
/// - a body still open at the end of input ends one past the last plain character
///
/// # Color Map Changes
///
/// Named tags are resolved once, at parse time; after the color map changes the markup
/// has to be parsed again to pick up new values. The plain string does not depend on
/// `colors`, only the span list does.
///
/// # Performance
///
/// Linear in the input length. The plain string and the span list are growable, so there
/// is no limit on input size.
///
/// # Examples
///
/// ```
/// use multicolor_markup::{ColorMap, ColorRgb, ColoredSpan, parse};
///
/// let mut colors = ColorMap::new();
/// colors.insert("red", ColorRgb::new(255, 0, 0));
///
/// let result = parse("HP: $red<12>/$#00FF00<40>", &colors);
/// assert_eq!(result.plain(), "HP: 12/40");
/// assert_eq!(
///     result.spans(),
///     &[
///         ColoredSpan::new(4, 6, ColorRgb::new(255, 0, 0)),
///         ColoredSpan::new(7, 9, ColorRgb::new(0, 255, 0)),
///     ]
/// );
/// ```
pub fn parse(raw: &str, colors: &ColorMap) -> ParseResult {
    MarkupScanner::new(raw, colors).run()
}

/// A tag body that has been opened but not closed yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingSpan {
    /// Plain index of the first character of the body.
    start: usize,
    /// `None` when the tag named a color missing from the color map.
    color: Option<ColorRgb>,
}

/// Scanner states.
///
/// There is no nesting: a tag found in the `Tagged` state closes the pending span first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Outside of any tag body. `>` is literal.
    Plain,
    /// Inside a tag body. `>` closes it and `>>` is a literal `>`.
    Tagged(PendingSpan),
}

/// Tag name extracted from the input.
#[derive(Clone, Debug, Eq, PartialEq)]
struct TagToken {
    name: String,
    /// Input position where scanning continues.
    resume: usize,
}

struct MarkupScanner<'a> {
    colors: &'a ColorMap,
    input: Vec<char>,
    /// Position in `input`.
    position: usize,
    plain: String,
    /// Number of characters emitted to `plain`.
    cursor: usize,
    spans: Vec<ColoredSpan>,
    state: State,
}

impl<'a> MarkupScanner<'a> {
    fn new(raw: &str, colors: &'a ColorMap) -> Self {
        Self {
            colors,
            input: raw.chars().collect(),
            position: 0,
            plain: String::with_capacity(raw.len()),
            cursor: 0,
            spans: Vec::new(),
            state: State::Plain,
        }
    }

    fn run(mut self) -> ParseResult {
        while let Some(ch) = self.peek(0) {
            match ch {
                TAG_CLOSE => self.process_close(),
                FORMAT_INTRODUCER => self.process_format(),
                _ => {
                    self.emit(ch);
                    self.position += 1;
                }
            }
        }
        self.finish()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn emit(&mut self, ch: char) {
        self.plain.push(ch);
        self.cursor += 1;
    }

    fn process_close(&mut self) {
        match self.state {
            State::Plain => {
                self.emit(TAG_CLOSE);
                self.position += 1;
            }
            State::Tagged(_) if self.peek(1) == Some(TAG_CLOSE) => {
                self.emit(TAG_CLOSE);
                self.position += 2;
            }
            State::Tagged(_) => {
                self.close_span(self.cursor);
                self.position += 1;
            }
        }
    }

    fn process_format(&mut self) {
        match self.peek(1) {
            None => {
                debug!(position = self.position, "dropping trailing format introducer");
                self.position += 1;
            }
            Some(FORMAT_INTRODUCER) => {
                self.emit(FORMAT_INTRODUCER);
                self.position += 2;
            }
            Some(next) => match self.extract_tag(self.position + 1) {
                Some(tag) => {
                    self.open_span(&tag.name);
                    self.position = tag.resume;
                }
                None => {
                    debug!(
                        position = self.position,
                        "malformed tag without a body, emitting it as text"
                    );
                    self.emit(next);
                    self.position += 2;
                }
            },
        }
    }

    /// Reads a tag name starting at `start`, up to the next `<`.
    ///
    /// An empty tag name whose `<` is the very end of the input (`$<`) is rejected.
    /// Without any `<` the rest of the input is taken as the tag name, but only the first
    /// character of it is consumed; the remainder is scanned again as ordinary text.
    fn extract_tag(&self, start: usize) -> Option<TagToken> {
        let rest = &self.input[start..];
        match rest.iter().position(|&ch| ch == TAG_OPEN) {
            Some(offset) => {
                let open = start + offset;
                if offset == 0 && open + 1 == self.input.len() {
                    return None;
                }
                Some(TagToken {
                    name: rest[..offset].iter().collect(),
                    resume: open + 1,
                })
            }
            None => {
                debug!(position = start, "tag is missing '<', rescanning its text");
                Some(TagToken {
                    name: rest.iter().collect(),
                    resume: start + 1,
                })
            }
        }
    }

    fn open_span(&mut self, name: &str) {
        if let State::Tagged(_) = self.state {
            debug!(tag = name, "nested tag closes the open span");
            self.close_span(self.cursor);
        }
        let color = resolve(name, self.colors);
        if color.is_none() {
            debug!(tag = name, "unknown color name, span left uncolored");
        }
        trace!(tag = name, start = self.cursor, ?color, "span opened");
        self.state = State::Tagged(PendingSpan {
            start: self.cursor,
            color,
        });
    }

    fn close_span(&mut self, end: usize) {
        if let State::Tagged(pending) = self.state {
            self.state = State::Plain;
            match pending.color {
                Some(color) => {
                    trace!(start = pending.start, end, %color, "span closed");
                    self.spans.push(ColoredSpan::new(pending.start, end, color));
                }
                None => {
                    debug!(start = pending.start, end, "dropping uncolored span");
                }
            }
        }
    }

    fn finish(mut self) -> ParseResult {
        if let State::Tagged(_) = self.state {
            debug!("input ended inside a tag body");
            self.close_span(self.cursor + 1);
        }
        ParseResult {
            plain: self.plain,
            glyph_count: self.cursor,
            spans: self.spans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const RED: ColorRgb = ColorRgb::new(255, 0, 0);
    const BLUE: ColorRgb = ColorRgb::new(0, 0, 255);

    fn colors() -> ColorMap {
        let mut map = ColorMap::with_base(ColorRgb::WHITE);
        map.insert("red", RED);
        map.insert("blue", BLUE);
        map
    }

    #[test]
    fn test_plain_text_passes_through() {
        let result = parse("Hello, World!", &colors());
        assert_eq!(result.plain(), "Hello, World!");
        assert!(result.is_plain());
        assert_eq!(result.glyph_count(), 13);
    }

    #[test]
    fn test_empty_input() {
        let result = parse("", &colors());
        assert_eq!(result, ParseResult::default());
    }

    #[test]
    fn test_named_span() {
        let result = parse("a $red<bcd> e", &colors());
        assert_eq!(result.plain(), "a bcd e");
        assert_eq!(result.spans(), &[ColoredSpan::new(2, 5, RED)]);
    }

    #[test]
    fn test_hex_span() {
        let result = parse("$#FF0000<x>", &colors());
        assert_eq!(result.plain(), "x");
        assert_eq!(result.spans(), &[ColoredSpan::new(0, 1, RED)]);

        let result = parse("$#F<x>", &colors());
        assert_eq!(result.spans(), &[ColoredSpan::new(0, 1, ColorRgb::new(0, 0, 15))]);
    }

    #[test]
    fn test_sequential_spans() {
        let result = parse("$red<ab>-$blue<cd>", &colors());
        assert_eq!(result.plain(), "ab-cd");
        assert_eq!(
            result.spans(),
            &[ColoredSpan::new(0, 2, RED), ColoredSpan::new(3, 5, BLUE)]
        );
    }

    #[test]
    fn test_empty_body() {
        let result = parse("a$red<>b", &colors());
        assert_eq!(result.plain(), "ab");
        assert_eq!(result.spans(), &[ColoredSpan::new(1, 1, RED)]);
    }

    #[test]
    fn test_dollar_escape() {
        let result = parse("$$", &colors());
        assert_eq!(result.plain(), "$");
        assert!(result.is_plain());

        let result = parse("costs $$5", &colors());
        assert_eq!(result.plain(), "costs $5");
    }

    #[test]
    fn test_close_escape_inside_span() {
        let result = parse("$red<a>>b>", &colors());
        assert_eq!(result.plain(), "a>b");
        assert_eq!(result.spans(), &[ColoredSpan::new(0, 3, RED)]);
    }

    #[test]
    fn test_close_outside_span_is_literal() {
        let result = parse("a > b >> c", &colors());
        assert_eq!(result.plain(), "a > b >> c");
        assert!(result.is_plain());
    }

    #[test]
    fn test_open_bracket_outside_tag_is_literal() {
        let result = parse("1 < 2", &colors());
        assert_eq!(result.plain(), "1 < 2");
    }

    #[test]
    fn test_unterminated_span_is_one_past_end() {
        let result = parse("$red<abc", &colors());
        assert_eq!(result.plain(), "abc");
        assert_eq!(result.spans(), &[ColoredSpan::new(0, 4, RED)]);
        assert_eq!(result.spans()[0].end, result.glyph_count() + 1);
    }

    #[test]
    fn test_tag_without_open_bracket_rescans_text() {
        let result = parse("ab$red", &colors());
        assert_eq!(result.plain(), "abed");
        assert_eq!(result.spans(), &[ColoredSpan::new(2, 5, RED)]);
    }

    #[traced_test]
    #[test]
    fn test_dollar_without_tag_keeps_following_text() {
        let result = parse("Price: $5 each", &colors());
        assert_eq!(result.plain(), "Price:  each");
        assert!(result.is_plain());
        assert!(logs_contain("tag is missing '<'"));

        let result = parse("$5 > 3", &colors());
        assert_eq!(result.plain(), " 3");
        assert!(result.is_plain());
    }

    #[test]
    fn test_empty_tag_at_end_is_literal() {
        let result = parse("$<", &colors());
        assert_eq!(result.plain(), "<");
        assert!(result.is_plain());
    }

    #[test]
    fn test_tag_ending_in_open_bracket_opens_span() {
        let result = parse("x$red<", &colors());
        assert_eq!(result.plain(), "x");
        assert_eq!(result.spans(), &[ColoredSpan::new(1, 2, RED)]);
    }

    #[test]
    fn test_trailing_introducer_is_dropped() {
        let result = parse("abc$", &colors());
        assert_eq!(result.plain(), "abc");
        assert!(result.is_plain());
    }

    #[traced_test]
    #[test]
    fn test_unknown_name_opens_uncolored_span() {
        let result = parse("$green<a>>b>c>", &colors());
        assert_eq!(result.plain(), "a>bc>");
        assert!(result.is_plain());
        assert!(logs_contain("unknown color name"));
        assert!(logs_contain("dropping uncolored span"));
    }

    #[traced_test]
    #[test]
    fn test_nested_tag_closes_then_reopens() {
        let result = parse("$red<a$blue<b>c>", &colors());
        assert_eq!(result.plain(), "abc>");
        assert_eq!(
            result.spans(),
            &[ColoredSpan::new(0, 1, RED), ColoredSpan::new(1, 2, BLUE)]
        );
        assert!(logs_contain("nested tag closes the open span"));
    }

    #[test]
    fn test_indices_count_characters() {
        let result = parse("ü $red<ñé>", &colors());
        assert_eq!(result.plain(), "ü ñé");
        assert_eq!(result.glyph_count(), 4);
        assert_eq!(result.spans(), &[ColoredSpan::new(2, 4, RED)]);
    }

    #[test]
    fn test_color_at() {
        let result = parse("a$red<b>c", &colors());
        assert_eq!(result.color_at(0), None);
        assert_eq!(result.color_at(1), Some(RED));
        assert_eq!(result.color_at(2), None);
    }

    #[test]
    fn test_base_key_is_unreachable_from_markup() {
        let result = parse("$$<x>", &colors());
        assert_eq!(result.plain(), "$<x>");
        assert!(result.is_plain());
    }

    #[test]
    fn test_span_helpers() {
        let span = ColoredSpan::new(2, 5, RED);
        assert_eq!(span.range(), 2..5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(span.contains(4));
        assert!(!span.contains(5));
        assert!(ColoredSpan::new(3, 1, RED).is_empty());
    }

    #[test]
    fn test_from_plain_keeps_markup_verbatim() {
        let result = ParseResult::from_plain("$red<x>");
        assert_eq!(result.plain(), "$red<x>");
        assert_eq!(result.glyph_count(), 7);
        assert!(result.is_plain());
    }
}

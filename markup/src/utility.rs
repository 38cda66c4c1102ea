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

use crate::consts::{FORMAT_INTRODUCER, TAG_CLOSE};
use crate::{ColorMap, parse};
use std::borrow::Cow;

/// Removes color markup from a string.
///
/// The result is the same plain string [`parse`] produces; it does not depend on any
/// color map since unknown names are consumed just like known ones.
///
/// # Performance
///
/// Without a `$` in the input no tag can open and `>` is always literal, so the input is
/// returned borrowed (zero-copy). Otherwise the input is parsed and a new `String` is
/// allocated.
///
/// # Arguments
///
/// * `str` - A string slice that may contain color markup
///
/// # Returns
///
/// Returns a `Cow<'_, str>`:
/// - `Cow::Borrowed(str)` if the input contains no `$`
/// - `Cow::Owned(String)` with the plain text otherwise
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use multicolor_markup::strip_markup;
///
/// assert_eq!(strip_markup("$red<Red> Text"), "Red Text");
/// assert_eq!(strip_markup("$$10 > $$5"), "$10 > $5");
///
/// let plain = strip_markup("Plain Text");
/// assert!(matches!(plain, Cow::Borrowed(_)));
/// ```
pub fn strip_markup(str: &str) -> Cow<'_, str> {
    if !str.contains(FORMAT_INTRODUCER) {
        return Cow::Borrowed(str);
    }
    let (plain, _) = parse(str, &ColorMap::new()).into_parts();
    Cow::Owned(plain)
}

/// Escapes text for use inside a tag body.
///
/// Doubles every `$` and `>`, so `$name<` + escaped + `>` always renders `text` verbatim.
///
/// # Arguments
///
/// * `str` - Text to embed in a tag body
///
/// # Returns
///
/// `Cow::Borrowed(str)` if the text contains neither `$` nor `>`, otherwise an owned
/// escaped copy.
///
/// # Limitations
///
/// Outside of a tag body `>>` is not an escape and renders as two characters, so escaped
/// text is only meant for bodies.
///
/// ```
/// # use multicolor_markup::{ColorMap, escape_markup, parse};
/// let body = escape_markup("$5 -> $6");
/// assert_eq!(body, "$$5 ->> $$6");
///
/// let markup = format!("$#FFFF00<{body}>");
/// assert_eq!(parse(&markup, &ColorMap::new()).plain(), "$5 -> $6");
/// ```
pub fn escape_markup(str: &str) -> Cow<'_, str> {
    if !str.contains([FORMAT_INTRODUCER, TAG_CLOSE]) {
        return Cow::Borrowed(str);
    }
    let mut escaped = String::with_capacity(str.len() + 8);
    for ch in str.chars() {
        if ch == FORMAT_INTRODUCER || ch == TAG_CLOSE {
            escaped.push(ch);
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorRgb;

    #[test]
    fn test_strip_borrowed_without_introducer() {
        assert!(matches!(strip_markup("a > b"), Cow::Borrowed("a > b")));
    }

    #[test]
    fn test_strip_removes_unknown_tags() {
        assert_eq!(strip_markup("$nope<hidden tag>!"), "hidden tag!");
    }

    #[test]
    fn test_escape_borrowed_without_specials() {
        assert!(matches!(escape_markup("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_escaped_body_renders_verbatim() {
        let text = "a>b$$c>>";
        let markup = format!("$x<{}>", escape_markup(text));
        let colors: ColorMap = [("x", ColorRgb::WHITE)].into_iter().collect();
        let result = parse(&markup, &colors);
        assert_eq!(result.plain(), text);
        assert_eq!(result.spans().len(), 1);
        assert_eq!(result.spans()[0].range(), 0..text.chars().count());
    }
}

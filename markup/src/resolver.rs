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

use crate::consts::HEX_PREFIX;
use crate::{ColorMap, ColorRgb};

/// Resolves a tag token to a color.
///
/// Tokens starting with `#` are hex color codes and always resolve, see
/// [`ColorRgb::from_hex_code`]. Any other token is an exact, case-sensitive lookup in
/// `colors` and yields `None` when absent.
///
/// # Arguments
///
/// * `token` - Tag name as written between `$` and `<`
/// * `colors` - Named colors, including the reserved base color entry
///
/// # Returns
///
/// The resolved color, or `None` for a name missing from `colors`.
///
/// # Examples
///
/// ```
/// use multicolor_markup::{ColorMap, ColorRgb, resolve};
///
/// let mut colors = ColorMap::new();
/// colors.insert("red", ColorRgb::new(255, 0, 0));
///
/// assert_eq!(resolve("red", &colors), Some(ColorRgb::new(255, 0, 0)));
/// assert_eq!(resolve("#00FF00", &colors), Some(ColorRgb::new(0, 255, 0)));
/// assert_eq!(resolve("green", &colors), None);
/// ```
pub fn resolve(token: &str, colors: &ColorMap) -> Option<ColorRgb> {
    match token.strip_prefix(HEX_PREFIX) {
        Some(code) => Some(ColorRgb::from_hex_code(code)),
        None => colors.get(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ColorMap {
        let mut map = ColorMap::with_base(ColorRgb::WHITE);
        map.insert("red", ColorRgb::new(255, 0, 0));
        map
    }

    #[test]
    fn test_resolve_named() {
        assert_eq!(resolve("red", &colors()), Some(ColorRgb::new(255, 0, 0)));
        assert_eq!(resolve("$", &colors()), Some(ColorRgb::WHITE));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("RED", &colors()), None);
        assert_eq!(resolve("", &colors()), None);
    }

    #[test]
    fn test_resolve_hex_never_fails() {
        assert_eq!(resolve("#FF0000", &colors()), Some(ColorRgb::new(255, 0, 0)));
        assert_eq!(resolve("#F", &colors()), Some(ColorRgb::new(0, 0, 15)));
        assert_eq!(resolve("#", &colors()), Some(ColorRgb::BLACK));
        assert_eq!(resolve("#nothex", &colors()), Some(ColorRgb::BLACK));
    }

    #[test]
    fn test_hex_ignores_color_map() {
        let mut map = ColorMap::new();
        map.insert("#FF0000", ColorRgb::WHITE);
        assert_eq!(resolve("#FF0000", &map), Some(ColorRgb::new(255, 0, 0)));
    }
}

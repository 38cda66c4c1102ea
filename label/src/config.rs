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

//! Label configuration
//!
//! ```
//! use multicolor_label::LabelConfig;
//! use multicolor_markup::ColorRgb;
//!
//! let config = LabelConfig::new()
//!     .with_color(ColorRgb::new(200, 200, 200))
//!     .with_named_color("red", ColorRgb::new(255, 0, 0))
//!     .with_color_literal("sky", "#87CEEB")
//!     .unwrap();
//! assert_eq!(config.colors.get("sky"), Some(ColorRgb::new(135, 206, 235)));
//! ```

use crate::LabelResult;
use multicolor_markup::{ColorMap, ColorRgb};

/// Initial state of a label
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelConfig {
    /// Base color of glyphs outside of any colored span
    pub color: ColorRgb,

    /// Named colors available to markup tags
    pub colors: ColorMap,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            color: ColorRgb::WHITE,
            colors: ColorMap::with_base(ColorRgb::WHITE),
        }
    }
}

impl LabelConfig {
    /// White base color and no named colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base color
    pub fn with_color(mut self, color: ColorRgb) -> Self {
        self.color = color;
        self.colors.set_base(color);
        self
    }

    /// Add a named color
    pub fn with_named_color(mut self, name: impl Into<String>, color: ColorRgb) -> Self {
        self.colors.insert(name, color);
        self
    }

    /// Add a named color given as `#RRGGBB`
    pub fn with_color_literal(self, name: impl Into<String>, literal: &str) -> LabelResult<Self> {
        let color = literal.parse::<ColorRgb>()?;
        Ok(self.with_named_color(name, color))
    }

    /// Replace the color map
    ///
    /// A map without a base color entry gets the configured base color when the label
    /// is created.
    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabelError;

    #[test]
    fn test_default_config() {
        let config = LabelConfig::default();
        assert_eq!(config.color, ColorRgb::WHITE);
        assert_eq!(config.colors.base(), Some(ColorRgb::WHITE));
        assert_eq!(config.colors.len(), 1);
    }

    #[test]
    fn test_with_color_updates_base_entry() {
        let config = LabelConfig::new().with_color(ColorRgb::BLACK);
        assert_eq!(config.colors.base(), Some(ColorRgb::BLACK));
    }

    #[test]
    fn test_with_color_literal_rejects_short_codes() {
        let result = LabelConfig::new().with_color_literal("red", "#F00");
        assert!(matches!(result, Err(LabelError::Markup(_))));
    }

    #[test]
    fn test_with_colors_replaces_map() {
        let config = LabelConfig::new().with_colors(ColorMap::new());
        assert!(config.colors.is_empty());
        assert_eq!(config.color, ColorRgb::WHITE);
    }
}

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

//! Error types for the label

use multicolor_markup::MarkupError;
use thiserror::Error;

/// Result type for label operations
pub type LabelResult<T> = std::result::Result<T, LabelError>;

/// Label error types
#[derive(Debug, Error)]
pub enum LabelError {
    /// A span or the base color sweep addressed a glyph the renderer does not have.
    ///
    /// This happens when the renderer produced a different number of glyphs than the
    /// plain string has characters.
    #[error("Glyph {index} out of range ({glyph_count} glyphs rendered)")]
    GlyphOutOfRange {
        /// The requested glyph index
        index: usize,
        /// Number of glyphs the renderer reported
        glyph_count: usize,
    },

    /// Invalid color in the label configuration
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

impl LabelError {
    /// Check if the error means renderer glyphs and parsed spans disagree
    pub fn is_sync_error(&self) -> bool {
        matches!(self, LabelError::GlyphOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LabelError::GlyphOutOfRange {
            index: 7,
            glyph_count: 5,
        };
        assert_eq!(err.to_string(), "Glyph 7 out of range (5 glyphs rendered)");
    }

    #[test]
    fn test_error_from_markup_error() {
        let markup_error = MarkupError::InvalidColor {
            value: "#1".to_string(),
            reason: "expected exactly 6 hex digits",
        };
        let err: LabelError = markup_error.into();
        assert!(matches!(err, LabelError::Markup(_)));
        assert!(!err.is_sync_error());
    }

    #[test]
    fn test_error_is_sync_error() {
        let err = LabelError::GlyphOutOfRange {
            index: 0,
            glyph_count: 0,
        };
        assert!(err.is_sync_error());
    }
}

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

//! Error types for the markup crate.
//!
//! The scanner and the color resolver never fail: malformed tags, unknown color names
//! and truncated hex codes all degrade in-band. The only fallible operation is strict
//! parsing of a color literal, used when colors come from configuration rather than
//! from markup.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`MarkupError`].
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors that can occur when working with markup colors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MarkupError {
    /// A color literal could not be parsed.
    ///
    /// Strict color literals are `#RRGGBB` or `RRGGBB` with exactly six hex digits.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input
        value: String,
        /// Description of why it was rejected
        reason: &'static str,
    },
}

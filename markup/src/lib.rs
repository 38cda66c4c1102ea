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

//! Inline color markup for bitmap-font labels.
//!
//! A markup string such as `"Gold: $#FFD700<250>"` is scanned once into a plain string
//! (`"Gold: 250"`) and a list of [`ColoredSpan`]s over the plain string's character
//! indices. Named tags (`$red<...>`) are resolved against a [`ColorMap`].

mod color;
mod colormap;
mod consts;
mod resolver;
mod result;
mod scanner;
mod utility;

pub use self::color::ColorRgb;
pub use self::colormap::ColorMap;
pub use self::consts::{
    BASE_COLOR_KEY, FORMAT_INTRODUCER, HEX_PREFIX, MAX_HEX_DIGITS, TAG_CLOSE, TAG_OPEN,
};
pub use self::resolver::resolve;
pub use self::result::{MarkupError, MarkupResult};
pub use self::scanner::{ColoredSpan, ParseResult, parse};
pub use self::utility::{escape_markup, strip_markup};

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

use crate::ColorRgb;
use crate::consts::BASE_COLOR_KEY;
use std::collections::HashMap;

/// A mutable table of named colors referenced by markup tags.
///
/// Keys are case-sensitive. The reserved key [`BASE_COLOR_KEY`](crate::BASE_COLOR_KEY)
/// (`"$"`) holds the label's current base color, which the label rewrites whenever its
/// base color changes. Because `$$` is the escape for a literal `$`, the reserved entry
/// cannot be named from markup; it only feeds the label's default tint.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorMap {
    colors: HashMap<String, ColorRgb>,
}

impl ColorMap {
    /// Creates an empty color map.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Creates a color map whose only entry is the base color.
    pub fn with_base(color: ColorRgb) -> Self {
        let mut map = Self::new();
        map.set_base(color);
        map
    }

    /// Looks up a color by exact name.
    pub fn get(&self, name: &str) -> Option<ColorRgb> {
        self.colors.get(name).copied()
    }

    /// Returns `true` when `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Inserts or replaces a named color, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, color: ColorRgb) -> Option<ColorRgb> {
        self.colors.insert(name.into(), color)
    }

    /// Removes a named color, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<ColorRgb> {
        self.colors.remove(name)
    }

    /// The reserved base color entry, if set.
    pub fn base(&self) -> Option<ColorRgb> {
        self.get(BASE_COLOR_KEY)
    }

    /// Writes the reserved base color entry.
    pub fn set_base(&mut self, color: ColorRgb) {
        self.colors.insert(BASE_COLOR_KEY.to_string(), color);
    }

    /// Number of entries, including the base color entry.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over `(name, color)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColorRgb)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }
}

impl<K: Into<String>> FromIterator<(K, ColorRgb)> for ColorMap {
    fn from_iter<T: IntoIterator<Item = (K, ColorRgb)>>(iter: T) -> Self {
        let mut map = ColorMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, ColorRgb)> for ColorMap {
    fn extend<T: IntoIterator<Item = (K, ColorRgb)>>(&mut self, iter: T) {
        for (name, color) in iter {
            self.insert(name, color);
        }
    }
}

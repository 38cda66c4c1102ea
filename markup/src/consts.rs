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

//! Characters that make up the markup syntax.

/// Introduces a tag (`$name<`) or, when doubled, a literal `$`.
pub const FORMAT_INTRODUCER: char = '$';

/// Terminates a tag name and opens the tag body.
pub const TAG_OPEN: char = '<';

/// Closes the current tag body or, when doubled inside a body, a literal `>`.
pub const TAG_CLOSE: char = '>';

/// Marks a tag name as a hex color code instead of a color map entry.
pub const HEX_PREFIX: char = '#';

/// Maximum number of hex digits read from a color code (24 bits).
pub const MAX_HEX_DIGITS: usize = 6;

/// Reserved color map key holding the label's base color.
pub const BASE_COLOR_KEY: &str = "$";

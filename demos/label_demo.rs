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

//! Multicolor Label Demonstration
//!
//! Renders a few markup strings into a [`GlyphBuffer`] and prints every glyph to the
//! terminal with its tint as a 24-bit ANSI color.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example label_demo
//! ```

use multicolor_label::{ColorRgb, GlyphBuffer, LabelConfig, LabelResult, MulticolorLabel};

fn main() -> LabelResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = LabelConfig::new()
        .with_color(ColorRgb::new(220, 220, 220))
        .with_named_color("damage", ColorRgb::new(230, 60, 60))
        .with_color_literal("heal", "#3CE67A")?;

    let mut label = MulticolorLabel::with_config(
        GlyphBuffer::new(),
        "Goblin hits you for $damage<12>, you heal $heal<5>.",
        &config,
    )?;
    print_label(&label);

    label.set_colored_string("Escapes: $$100 and $#FFD700<a >> b>, bare > stays")?;
    print_label(&label);

    label.set_color(ColorRgb::new(120, 160, 255))?;
    print_label(&label);

    label.set_named_color("damage", ColorRgb::new(255, 140, 0));
    label.set_colored_string("Goblin crits you for $damage<30>!")?;
    print_label(&label);

    label.set_colored_string("Unknown $mystery<tag> and $damage<unterminated")?;
    print_label(&label);

    Ok(())
}

fn print_label(label: &MulticolorLabel<GlyphBuffer>) {
    let mut line = String::new();
    for glyph in label.renderer().glyphs() {
        let ColorRgb { r, g, b } = glyph.tint;
        line.push_str(&format!("\x1b[38;2;{r};{g};{b}m{}", glyph.ch));
    }
    println!("{line}\x1b[0m");
}

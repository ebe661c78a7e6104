// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Model font → Pango font
//!
//! The only place a `FontDescriptor` meets the toolkit. Conversion runs one
//! way; Pango descriptions are never read back into the model.

use gtk4::{pango, Label};

use crate::core::FontDescriptor;

/// Largest point size Pango can represent without overflowing its
/// fixed-point `i32` units.
const MAX_PANGO_POINTS: u32 = (i32::MAX / pango::SCALE) as u32;

/// Builds a Pango font description for `font`
pub fn font_description(font: &FontDescriptor) -> pango::FontDescription {
    let mut description = pango::FontDescription::new();
    description.set_family(&font.family);

    let points = font.size.min(MAX_PANGO_POINTS) as i32;
    description.set_size(points * pango::SCALE);

    description
}

/// Builds an attribute list that renders a whole label in `font`
pub fn font_attributes(font: &FontDescriptor) -> pango::AttrList {
    let attrs = pango::AttrList::new();
    attrs.insert(pango::AttrFontDesc::new(&font_description(font)));
    attrs
}

/// Applies `font` to `label`, replacing any previous attributes
pub fn apply_font(label: &Label, font: &FontDescriptor) {
    label.set_attributes(Some(&font_attributes(font)));
}

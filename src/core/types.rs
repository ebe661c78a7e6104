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

//! src/core/types.rs
//!
//! Core type definitions shared by the model and the view
//!
//! - `FontDescriptor`: a (family, size) pair describing text rendering
//! - Compiled-in constants for the window, label and buttons
//!
//! Font sizes are owned integer state. Nothing in this crate recovers a
//! size by parsing a rendered font string.

use std::fmt;

/// Font family used by every widget in the window
pub const FONT_FAMILY: &str = "Papyrus";

/// Window title
pub const WINDOW_TITLE: &str = "MEOW";
/// Fixed window width in pixels
pub const WINDOW_WIDTH: i32 = 800;
/// Fixed window height in pixels
pub const WINDOW_HEIGHT: i32 = 400;

/// Text shown by the label before anyone answers
pub const QUESTION_TEXT: &str = "Do You Like Me?";
/// Text shown by the label once "Yes" is clicked
pub const YES_RESPONSE: &str = "YAY";
/// Label font size in points
pub const LABEL_FONT_SIZE: u32 = 20;
/// Horizontal padding around the label in pixels
pub const LABEL_PADDING_X: i32 = 20;
/// Vertical padding around the label in pixels
pub const LABEL_PADDING_Y: i32 = 100;

/// Caption of the "Yes" button
pub const YES_CAPTION: &str = "Yes";
/// Caption of the "No" button
pub const NO_CAPTION: &str = "No";
/// Starting font size of both buttons
pub const BUTTON_FONT_SIZE: u32 = 16;
/// Points added to the "No" button font on every click
pub const NO_GROWTH_STEP: u32 = 2;

/// A font family plus a point size
///
/// The size is a first-class field. `Display` exists for logging only
/// and its output is never read back.
///
/// # Example
/// ```
/// use do_you_like_me::core::FontDescriptor;
///
/// let font = FontDescriptor::new("Papyrus", 16);
/// assert_eq!(font.grown_by(2).size, 18);
/// assert_eq!(font.to_string(), "Papyrus 16");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Papyrus")
    pub family: String,
    /// Size in points
    pub size: u32,
}

impl FontDescriptor {
    /// Create a new descriptor
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }

    /// Same family, size increased by `step` points
    ///
    /// Growth is unbounded in practice; the addition saturates instead of
    /// wrapping so the size sequence can never go backwards.
    pub fn grown_by(&self, step: u32) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size.saturating_add(step),
        }
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

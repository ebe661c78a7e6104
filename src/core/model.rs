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

//! Widget state, independent of any toolkit
//!
//! The window owns one label and one button row; the row owns two
//! buttons. Entities that a handler mutates live behind
//! `Rc<RefCell<_>>` so the handler can be handed its own reference at
//! construction time.

use std::{cell::RefCell, rc::Rc};

use crate::core::types::{
    FontDescriptor, BUTTON_FONT_SIZE, FONT_FAMILY, LABEL_FONT_SIZE, NO_CAPTION, QUESTION_TEXT,
    WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, YES_CAPTION,
};

/// Shared, single-threaded handle to a piece of widget state
pub type Shared<T> = Rc<RefCell<T>>;

/// The question label
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelModel {
    /// Displayed text (mutated by the "Yes" handler)
    pub text: String,
    /// Font, fixed at creation
    pub font: FontDescriptor,
}

impl Default for LabelModel {
    fn default() -> Self {
        Self {
            text: QUESTION_TEXT.to_string(),
            font: FontDescriptor::new(FONT_FAMILY, LABEL_FONT_SIZE),
        }
    }
}

/// A push button with a fixed caption
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonModel {
    /// Caption, fixed at creation
    pub text: String,
    /// Current font. Only the "No" button's font ever changes.
    pub font: FontDescriptor,
}

impl ButtonModel {
    /// Create a button at the default button font
    pub fn new(caption: &str) -> Self {
        Self {
            text: caption.to_string(),
            font: FontDescriptor::new(FONT_FAMILY, BUTTON_FONT_SIZE),
        }
    }
}

/// Two equally weighted buttons laid out side by side
#[derive(Debug)]
pub struct ButtonRowModel {
    /// Left column
    pub yes: Shared<ButtonModel>,
    /// Right column
    pub no: Shared<ButtonModel>,
}

impl Default for ButtonRowModel {
    fn default() -> Self {
        Self {
            yes: Rc::new(RefCell::new(ButtonModel::new(YES_CAPTION))),
            no: Rc::new(RefCell::new(ButtonModel::new(NO_CAPTION))),
        }
    }
}

/// Top-level window state
///
/// Title and size are fixed for the lifetime of the process.
#[derive(Debug)]
pub struct WindowModel {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub label: Shared<LabelModel>,
    pub buttons: ButtonRowModel,
}

impl WindowModel {
    /// Builds the initial window state from the compiled-in constants
    pub fn new() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            label: Rc::new(RefCell::new(LabelModel::default())),
            buttons: ButtonRowModel::default(),
        }
    }
}

impl Default for WindowModel {
    fn default() -> Self {
        Self::new()
    }
}

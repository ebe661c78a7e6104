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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{
    components::{ButtonRow, QuestionLabel},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Orientation, PolicyType, ScrolledWindow};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Question label with fixed padding
/// - Button row spanning the full width
///
/// The box sits in a `ScrolledWindow` with external policies on both
/// axes: content larger than the window is clipped and never raises the
/// window's minimum size, however large the "No" caption grows.
///
/// # Returns
///
/// Tuple of (root, question_label, button_row)
pub fn build_main_layout(
    controller: Rc<Controller>,
) -> (ScrolledWindow, Rc<QuestionLabel>, Rc<ButtonRow>) {
    // Create main vertical box
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    let question_label = Rc::new(QuestionLabel::new(controller.clone()));
    main_vbox.append(question_label.widget());

    let button_row = Rc::new(ButtonRow::new(controller));
    main_vbox.append(button_row.widget());

    let root = ScrolledWindow::builder()
        .hscrollbar_policy(PolicyType::External)
        .vscrollbar_policy(PolicyType::External)
        .propagate_natural_width(false)
        .propagate_natural_height(false)
        .child(&main_vbox)
        .build();

    (root, question_label, button_row)
}

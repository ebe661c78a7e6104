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

//! Question label component
//!
//! Shows the question, and later the answer, in the label font.
//!
//! # Example
//!
//! ```rust,no_run
//! use do_you_like_me::ui::{Controller, components::QuestionLabel};
//! use std::rc::Rc;
//!
//! let controller = Rc::new(Controller::new());
//! let label = QuestionLabel::new(controller.clone());
//!
//! // After the controller handled an event:
//! label.refresh();
//! ```

use gtk4::{Align, Label};
use std::rc::Rc;

use crate::core::types::{LABEL_PADDING_X, LABEL_PADDING_Y};
use crate::ui::{font::apply_font, Controller};

/// Label displaying the controller's current label text
pub struct QuestionLabel {
    /// Root widget (label)
    widget: Label,
    /// Controller holding the label state
    controller: Rc<Controller>,
}

impl QuestionLabel {
    /// Creates the label and renders the initial state
    pub fn new(controller: Rc<Controller>) -> Self {
        let widget = Label::builder()
            .halign(Align::Center)
            .margin_start(LABEL_PADDING_X)
            .margin_end(LABEL_PADDING_X)
            .margin_top(LABEL_PADDING_Y)
            .margin_bottom(LABEL_PADDING_Y)
            .build();

        let label = Self { widget, controller };
        label.refresh();
        label
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Label {
        &self.widget
    }

    /// Redraws text and font from the controller
    pub fn refresh(&self) {
        self.widget.set_text(&self.controller.label_text());
        apply_font(&self.widget, &self.controller.label_font());
    }
}

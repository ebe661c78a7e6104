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

//! Button row component
//!
//! Two buttons side by side in equally weighted columns spanning the full
//! window width. Each button carries its own `Label` child so its font
//! can be set independently.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────┬────────────────────┐
//! │        Yes         │         No         │
//! └────────────────────┴────────────────────┘
//! ```

use gtk4::prelude::BoxExt;
use gtk4::{Box as GtkBox, Button, Label, Orientation};
use std::rc::Rc;

use crate::ui::{font::apply_font, Controller};

/// Horizontal row holding the "Yes" and "No" buttons
pub struct ButtonRow {
    /// Root widget (homogeneous horizontal box)
    widget: GtkBox,
    /// "Yes" button
    yes_button: Button,
    /// Caption of the "Yes" button
    yes_label: Label,
    /// "No" button
    no_button: Button,
    /// Caption of the "No" button, resized on every "No" click
    no_label: Label,
    /// Controller holding button state
    controller: Rc<Controller>,
}

impl ButtonRow {
    /// Creates a caption label and a button wrapping it
    fn create_button(caption: &str) -> (Button, Label) {
        let label = Label::new(Some(caption));
        let button = Button::builder().child(&label).hexpand(true).build();
        (button, label)
    }

    /// Creates the row and renders the initial state
    pub fn new(controller: Rc<Controller>) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .homogeneous(true) // Equal column weights
            .hexpand(true)
            .build();

        let (yes_button, yes_label) = Self::create_button(&controller.yes_caption());
        let (no_button, no_label) = Self::create_button(&controller.no_caption());

        widget.append(&yes_button);
        widget.append(&no_button);

        let row = Self {
            widget,
            yes_button,
            yes_label,
            no_button,
            no_label,
            controller,
        };
        row.refresh();
        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// The "Yes" button, for wiring up its click handler
    pub fn yes_button(&self) -> &Button {
        &self.yes_button
    }

    /// The "No" button, for wiring up its click handler
    pub fn no_button(&self) -> &Button {
        &self.no_button
    }

    /// Redraws both button fonts from the controller
    pub fn refresh(&self) {
        apply_font(&self.yes_label, &self.controller.yes_font());
        apply_font(&self.no_label, &self.controller.no_font());
    }
}

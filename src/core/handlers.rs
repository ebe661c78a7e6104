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

//! Click handlers and the events that trigger them
//!
//! Each handler receives a handle to exactly the entity it mutates when
//! it is constructed, so it can be exercised against a bare model in
//! tests without building a window.

use crate::core::{
    model::{ButtonModel, LabelModel, Shared},
    types::{NO_GROWTH_STEP, YES_RESPONSE},
};

/// A user input the event loop can deliver
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UiEvent {
    /// The "Yes" button was clicked
    YesClicked,
    /// The "No" button was clicked
    NoClicked,
}

/// A zero-argument procedure run to completion on the UI thread
pub trait Handler {
    fn invoke(&self);
}

/// Sets the label text to the "Yes" response
///
/// Idempotent: once the label reads "YAY" further clicks change nothing.
pub struct YesHandler {
    label: Shared<LabelModel>,
}

impl YesHandler {
    pub fn new(label: Shared<LabelModel>) -> Self {
        Self { label }
    }
}

impl Handler for YesHandler {
    fn invoke(&self) {
        let mut label = self.label.borrow_mut();
        if label.text != YES_RESPONSE {
            label.text = YES_RESPONSE.to_string();
        }
    }
}

/// Grows the "No" button's font by [`NO_GROWTH_STEP`] points
///
/// Reads the size straight from the button's state, adds the step and
/// writes the new descriptor back to that same button. The label and the
/// "Yes" button are never touched.
pub struct NoHandler {
    button: Shared<ButtonModel>,
}

impl NoHandler {
    pub fn new(button: Shared<ButtonModel>) -> Self {
        Self { button }
    }
}

impl Handler for NoHandler {
    fn invoke(&self) {
        let mut button = self.button.borrow_mut();
        button.font = button.font.grown_by(NO_GROWTH_STEP);
    }
}

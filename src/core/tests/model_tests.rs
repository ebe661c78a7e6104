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

use crate::core::model::{ButtonModel, LabelModel, WindowModel};
use crate::core::types::{
    BUTTON_FONT_SIZE, FONT_FAMILY, LABEL_FONT_SIZE, NO_CAPTION, QUESTION_TEXT, WINDOW_HEIGHT,
    WINDOW_TITLE, WINDOW_WIDTH, YES_CAPTION,
};

#[test]
fn test_label_defaults() {
    let label = LabelModel::default();

    assert_eq!(label.text, "Do You Like Me?");
    assert_eq!(label.text, QUESTION_TEXT);
    assert_eq!(label.font.family, FONT_FAMILY);
    assert_eq!(label.font.size, 20);
    assert_eq!(label.font.size, LABEL_FONT_SIZE);
}

#[test]
fn test_button_defaults() {
    let button = ButtonModel::new("Maybe");

    assert_eq!(button.text, "Maybe");
    assert_eq!(button.font.family, FONT_FAMILY);
    assert_eq!(button.font.size, BUTTON_FONT_SIZE);
}

#[test]
fn test_window_model_layout() {
    let window = WindowModel::new();

    assert_eq!(window.title, WINDOW_TITLE);
    assert_eq!(window.title, "MEOW");
    assert_eq!((window.width, window.height), (800, 400));
    assert_eq!((window.width, window.height), (WINDOW_WIDTH, WINDOW_HEIGHT));
    assert_eq!(window.buttons.yes.borrow().text, YES_CAPTION);
    assert_eq!(window.buttons.no.borrow().text, NO_CAPTION);
    assert_eq!(window.buttons.yes.borrow().font.size, 16);
    assert_eq!(window.buttons.no.borrow().font.size, 16);
}

#[test]
fn test_buttons_do_not_share_state() {
    let window = WindowModel::new();
    window.buttons.no.borrow_mut().font.size = 40;

    assert_eq!(window.buttons.yes.borrow().font.size, BUTTON_FONT_SIZE);
}

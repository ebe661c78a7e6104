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

//! Controller tests
//!
//! Tests for event dispatch and the state the View reads back

use crate::core::{UiEvent, WindowModel};
use crate::ui::Controller;

/// Helper: Dispatches `event` `times` times
fn click(controller: &Controller, event: UiEvent, times: usize) {
    for _ in 0..times {
        controller.dispatch(event);
    }
}

#[test]
fn test_initial_state() {
    let controller = Controller::new();

    assert_eq!(controller.label_text(), "Do You Like Me?");
    assert_eq!(controller.no_font().size, 16);
    assert_eq!(controller.yes_font().size, 16);
    assert_eq!(controller.label_font().size, 20);
    assert_eq!(controller.title(), "MEOW");
    assert_eq!(controller.window_size(), (800, 400));
}

#[test]
fn test_captions() {
    let controller = Controller::new();

    assert_eq!(controller.yes_caption(), "Yes");
    assert_eq!(controller.no_caption(), "No");
}

#[test]
fn test_yes_once_then_again() {
    let controller = Controller::new();

    controller.dispatch(UiEvent::YesClicked);
    assert_eq!(controller.label_text(), "YAY");

    controller.dispatch(UiEvent::YesClicked);
    assert_eq!(controller.label_text(), "YAY", "Yes should be idempotent");
}

#[test]
fn test_no_size_after_n_clicks() {
    for n in [0usize, 1, 2, 5, 50] {
        let controller = Controller::new();
        click(&controller, UiEvent::NoClicked, n);

        assert_eq!(
            controller.no_font().size as usize,
            16 + 2 * n,
            "No button should be 16 + 2n after {} clicks",
            n
        );
    }
}

#[test]
fn test_no_leaves_label_and_yes_alone() {
    let controller = Controller::new();
    let label_before = controller.label_text();
    let label_font_before = controller.label_font();
    let yes_font_before = controller.yes_font();

    click(&controller, UiEvent::NoClicked, 7);

    assert_eq!(controller.label_text(), label_before);
    assert_eq!(controller.label_font(), label_font_before);
    assert_eq!(controller.yes_font(), yes_font_before);
}

#[test]
fn test_no_leaves_label_alone_after_yes() {
    let controller = Controller::new();
    controller.dispatch(UiEvent::YesClicked);

    click(&controller, UiEvent::NoClicked, 3);

    assert_eq!(controller.label_text(), "YAY");
}

#[test]
fn test_yes_leaves_no_font_alone() {
    let controller = Controller::new();
    click(&controller, UiEvent::NoClicked, 2);
    let no_font_before = controller.no_font();

    click(&controller, UiEvent::YesClicked, 4);

    assert_eq!(controller.no_font(), no_font_before);
    assert_eq!(controller.no_font().size, 20);
}

#[test]
fn test_no_keeps_papyrus() {
    let controller = Controller::new();
    click(&controller, UiEvent::NoClicked, 3);

    assert_eq!(controller.no_font().family, "Papyrus");
}

#[test]
fn test_with_model_wires_handlers_to_that_model() {
    let model = WindowModel::new();
    let label = model.label.clone();
    let no_button = model.buttons.no.clone();

    let controller = Controller::with_model(model);
    controller.dispatch(UiEvent::YesClicked);
    controller.dispatch(UiEvent::NoClicked);

    assert_eq!(label.borrow().text, "YAY");
    assert_eq!(no_button.borrow().font.size, 18);
}

#[test]
fn test_end_to_end_session() {
    let controller = Controller::new();
    assert_eq!(controller.label_text(), "Do You Like Me?");
    assert_eq!(controller.no_font().size, 16);

    click(&controller, UiEvent::NoClicked, 3);
    assert_eq!(controller.no_font().size, 22);
    assert_eq!(controller.label_text(), "Do You Like Me?");

    controller.dispatch(UiEvent::YesClicked);
    assert_eq!(controller.label_text(), "YAY");
    assert_eq!(controller.no_font().size, 22);
}

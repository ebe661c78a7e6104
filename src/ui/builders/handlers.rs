//! Event handler setup
//!
//! Wires up the click handlers for the main UI:
//! - "Yes" button
//! - "No" button

use gtk4::prelude::*;
use std::rc::Rc;

use crate::core::UiEvent;
use crate::ui::components::{ButtonRow, QuestionLabel};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// Every click goes through `Controller::dispatch` and is followed by a
/// redraw of the affected component from the controller's state.
pub fn wire_up_handlers(
    controller:     Rc<Controller>,
    question_label: Rc<QuestionLabel>,
    button_row:     Rc<ButtonRow>,
) {
    // ============================================================================
    // Yes button handler
    // ============================================================================
    let controller_for_yes = controller.clone();
    let question_label_for_yes = question_label.clone();

    button_row.yes_button().connect_clicked(move |_| {
        controller_for_yes.dispatch(UiEvent::YesClicked);
        question_label_for_yes.refresh();
    });

    // ============================================================================
    // No button handler
    // ============================================================================
    let controller_for_no = controller.clone();
    let button_row_for_no = button_row.clone();

    button_row.no_button().connect_clicked(move |_| {
        controller_for_no.dispatch(UiEvent::NoClicked);
        button_row_for_no.refresh();
    });
}

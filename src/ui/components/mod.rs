//! UI Components
//!
//! GTK4 widgets for the question window.
//!
//! # Components
//!
//! - `question_label.rs` - The question (or answer) label
//! - `button_row.rs` - "Yes" / "No" buttons in equal columns

mod button_row;
mod question_label;

pub use button_row::ButtonRow;
pub use question_label::QuestionLabel;

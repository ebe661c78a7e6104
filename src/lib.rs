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

//! Do You Like Me?
//!
//! A single GTK4 window asking one question. Clicking "Yes" answers it;
//! clicking "No" makes the "No" button's font grow by two points.
//!
//! # Architecture
//!
//! - **`core`:** Widget state and click handlers (no GTK, fully unit tested)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Driving the model without a window
//!
//! ```
//! use do_you_like_me::core::UiEvent;
//! use do_you_like_me::ui::Controller;
//!
//! let controller = Controller::new();
//! for _ in 0..3 {
//!     controller.dispatch(UiEvent::NoClicked);
//! }
//! assert_eq!(controller.no_font().size, 22);
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use do_you_like_me::ui::App;
//!
//! let app = App::new()?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), do_you_like_me::ui::UiError>(())
//! ```

pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{FontDescriptor, UiEvent};

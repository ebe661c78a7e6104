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

//! src/core/mod.rs
//!
//! Core model module
//!
//! This module contains the widget state and the click handlers:
//! - Type definitions for font descriptors and compiled-in constants
//! - Label, button, button row and window state
//! - The `Handler` trait, its two implementations and the event enum
//!
//! Nothing here depends on GTK, so the whole behaviour of the window can
//! be unit tested without a display server.

pub mod handlers;
pub mod model;
pub mod types;

pub use handlers::{Handler, NoHandler, UiEvent, YesHandler};
pub use model::{ButtonModel, ButtonRowModel, LabelModel, Shared, WindowModel};
pub use types::FontDescriptor;

#[cfg(test)]
mod tests;

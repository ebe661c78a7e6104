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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller for everything it displays.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window (fixed size, fixed title)
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow};
use std::rc::Rc;

use crate::ui::builders::{build_main_layout, wire_up_handlers};
use crate::ui::{Controller, UiError};

/// GTK application id
pub const APPLICATION_ID: &str = "io.github.likeme.DoYouLikeMe";

/// GTK4 Application for the question window
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Initialises GTK and creates a new App
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - GTK is up and a display is available
    /// * `Err(UiError)` - GTK failed to initialise or there is no display
    ///
    /// # Example
    ///
    /// ```no_run
    /// use do_you_like_me::ui::App;
    ///
    /// let app = App::new()?;
    /// # Ok::<(), do_you_like_me::ui::UiError>(())
    /// ```
    pub fn new() -> Result<Self, UiError> {
        gtk4::init()?;

        let display = gdk::Display::default().ok_or(UiError::NoDisplay)?;
        log::info!("🖥️  Using display {}", display.name());

        // Create GTK4 Application
        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        let controller = Rc::new(Controller::new());

        Ok(Self { app, controller })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. The function blocks until the
    /// window is closed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use do_you_like_me::ui::App;
    /// # let app = App::new()?;
    /// app.run();  // Blocks until window closes
    /// # Ok::<(), do_you_like_me::ui::UiError>(())
    /// ```
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Process arguments belong to clap, not GTK
        self.app.run_with_args::<&str>(&[])
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window and all components.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        // A second activation just raises the existing window
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        let (width, height) = controller.window_size();

        // Create application window
        let window = ApplicationWindow::builder()
            .application(app)
            .title(controller.title())
            .default_width(width)
            .default_height(height)
            .resizable(false)
            .build();

        let (root, question_label, button_row) = build_main_layout(controller.clone());
        window.set_child(Some(&root));

        wire_up_handlers(controller, question_label, button_row);

        log::info!("🪟 Window ready ({}x{})", width, height);
        window.present();
    }
}

//! MVC Controller - Mediates between Model (WindowModel) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Own the window state and both click handlers
//! - Dispatch UI events to the matching handler
//! - Provide data to View in UI-friendly format
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets.
//! The View asks it for state after every event and redraws from that,
//! never the other way round.

use crate::core::{FontDescriptor, Handler, NoHandler, UiEvent, WindowModel, YesHandler};

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Window state (label + button row)
    window: WindowModel,
    /// Bound to the "Yes" button, holds the label handle
    yes_handler: YesHandler,
    /// Bound to the "No" button, holds the "No" button handle
    no_handler: NoHandler,
}

impl Controller {
    /// Creates a Controller around a freshly built window model
    ///
    /// # Example
    ///
    /// ```
    /// use do_you_like_me::ui::Controller;
    ///
    /// let controller = Controller::new();
    /// assert_eq!(controller.label_text(), "Do You Like Me?");
    /// assert_eq!(controller.no_font().size, 16);
    /// ```
    pub fn new() -> Self {
        Self::with_model(WindowModel::new())
    }

    /// Creates a Controller around an existing model
    ///
    /// Each handler is given its own handle to the entity it mutates.
    pub fn with_model(window: WindowModel) -> Self {
        let yes_handler = YesHandler::new(window.label.clone());
        let no_handler = NoHandler::new(window.buttons.no.clone());

        Self {
            window,
            yes_handler,
            no_handler,
        }
    }

    /// Runs the handler bound to `event` to completion
    ///
    /// # Example
    ///
    /// ```
    /// use do_you_like_me::core::UiEvent;
    /// use do_you_like_me::ui::Controller;
    ///
    /// let controller = Controller::new();
    /// controller.dispatch(UiEvent::NoClicked);
    /// controller.dispatch(UiEvent::YesClicked);
    ///
    /// assert_eq!(controller.label_text(), "YAY");
    /// assert_eq!(controller.no_font().size, 18);
    /// ```
    pub fn dispatch(&self, event: UiEvent) {
        self.handler_for(event).invoke();

        match event {
            UiEvent::YesClicked => log::debug!("👍 Yes → label '{}'", self.label_text()),
            UiEvent::NoClicked => log::debug!("👎 No → font '{}'", self.no_font()),
        }
    }

    fn handler_for(&self, event: UiEvent) -> &dyn Handler {
        match event {
            UiEvent::YesClicked => &self.yes_handler,
            UiEvent::NoClicked => &self.no_handler,
        }
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.window.title
    }

    /// Fixed window size as (width, height)
    pub fn window_size(&self) -> (i32, i32) {
        (self.window.width, self.window.height)
    }

    /// Current label text
    pub fn label_text(&self) -> String {
        self.window.label.borrow().text.clone()
    }

    /// Label font (fixed)
    pub fn label_font(&self) -> FontDescriptor {
        self.window.label.borrow().font.clone()
    }

    /// "Yes" button caption
    pub fn yes_caption(&self) -> String {
        self.window.buttons.yes.borrow().text.clone()
    }

    /// "Yes" button font (fixed)
    pub fn yes_font(&self) -> FontDescriptor {
        self.window.buttons.yes.borrow().font.clone()
    }

    /// "No" button caption
    pub fn no_caption(&self) -> String {
        self.window.buttons.no.borrow().text.clone()
    }

    /// Current "No" button font
    pub fn no_font(&self) -> FontDescriptor {
        self.window.buttons.no.borrow().font.clone()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

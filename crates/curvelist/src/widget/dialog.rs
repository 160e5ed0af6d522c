//! Modal question dialogs.
//!
//! The list never draws a dialog itself. It builds a [`MessageBox`]
//! describing the question and hands it to a [`ConfirmationPrompt`] supplied
//! by the host toolkit, which blocks until the user answers.
//!
//! # Example
//!
//! ```
//! use curvelist::widget::dialog::{DefaultButtonPrompt, MessageBox, StandardButton};
//!
//! let question = MessageBox::question("Warning", "Proceed?")
//!     .with_standard_buttons(StandardButton::YES | StandardButton::NO)
//!     .with_default_button(StandardButton::NO);
//!
//! let answer = question.exec(&mut DefaultButtonPrompt);
//! assert_eq!(answer, StandardButton::NO);
//! ```

use curvelist_core::logging::targets;

/// Standard dialog buttons, combinable as flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StandardButton(u32);

impl StandardButton {
    /// No buttons.
    pub const NONE: StandardButton = StandardButton(0);
    /// An "OK" button.
    pub const OK: StandardButton = StandardButton(1 << 0);
    /// A "Cancel" button.
    pub const CANCEL: StandardButton = StandardButton(1 << 1);
    /// A "Yes" button.
    pub const YES: StandardButton = StandardButton(1 << 2);
    /// A "No" button.
    pub const NO: StandardButton = StandardButton(1 << 3);

    /// Check if a button flag is set.
    pub fn has(&self, button: StandardButton) -> bool {
        button.0 != 0 && (self.0 & button.0) == button.0
    }
}

impl std::ops::BitOr for StandardButton {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Icon class of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageIcon {
    /// No icon.
    #[default]
    NoIcon,
    /// A question mark.
    Question,
    /// A warning sign.
    Warning,
}

/// Description of a modal question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    icon: MessageIcon,
    title: String,
    text: String,
    buttons: StandardButton,
    default_button: StandardButton,
}

impl MessageBox {
    /// Creates a question box with OK as its only button.
    pub fn question(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: MessageIcon::Question,
            title: title.into(),
            text: text.into(),
            buttons: StandardButton::OK,
            default_button: StandardButton::OK,
        }
    }

    /// Sets the buttons offered.
    pub fn with_standard_buttons(mut self, buttons: StandardButton) -> Self {
        self.buttons = buttons;
        self
    }

    /// Sets the button chosen when the dialog is dismissed or Enter pressed.
    pub fn with_default_button(mut self, button: StandardButton) -> Self {
        self.default_button = button;
        self
    }

    /// Gets the icon.
    pub fn icon(&self) -> MessageIcon {
        self.icon
    }

    /// Gets the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the offered buttons.
    pub fn standard_buttons(&self) -> StandardButton {
        self.buttons
    }

    /// Gets the default button.
    pub fn default_button(&self) -> StandardButton {
        self.default_button
    }

    /// Shows the box through `prompt` and returns the chosen button.
    ///
    /// An answer that is not one of the offered buttons counts as the
    /// default button.
    pub fn exec(&self, prompt: &mut dyn ConfirmationPrompt) -> StandardButton {
        let answer = prompt.ask(self);
        if self.buttons.has(answer) {
            answer
        } else {
            tracing::debug!(
                target: targets::MENU,
                ?answer,
                "prompt returned a button that was not offered, using default"
            );
            self.default_button
        }
    }
}

/// Shows a modal question and blocks until it is answered.
pub trait ConfirmationPrompt: Send {
    /// Presents `message` and returns the button the user chose.
    fn ask(&mut self, message: &MessageBox) -> StandardButton;
}

/// A prompt that answers every question with its default button.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultButtonPrompt;

impl ConfirmationPrompt for DefaultButtonPrompt {
    fn ask(&mut self, message: &MessageBox) -> StandardButton {
        message.default_button()
    }
}

impl<F> ConfirmationPrompt for F
where
    F: FnMut(&MessageBox) -> StandardButton + Send,
{
    fn ask(&mut self, message: &MessageBox) -> StandardButton {
        self(message)
    }
}

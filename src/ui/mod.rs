//! User interface helpers shared by the menu engine and the firmware host.
//!
//! ## Components
//!
//! - **input_logic**: clamp/wrap cursor stepping (pure, host-tested)
//! - **buttons** *(firmware only)*: debounced GPIO buttons → [`NavAction`]
//! - **display** *(firmware only)*: SSD1306 128×64 OLED as a two-line
//!   [`MenuDisplay`](crate::menu::MenuDisplay)
//!
//! The firmware-only modules are compiled into the binary from `main.rs`.

pub mod input_logic;

use crate::menu::NavAction;

/// Physical buttons on the front panel (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Inc,
    Dec,
    Select,
    Escape,
    Help,
}

impl Button {
    /// The menu action a press of this button stands for.
    pub const fn action(self) -> NavAction {
        match self {
            Button::Inc => NavAction::Inc,
            Button::Dec => NavAction::Dec,
            Button::Select => NavAction::Sel,
            Button::Escape => NavAction::Esc,
            Button::Help => NavAction::Help,
        }
    }

    /// Whether holding the button should auto-repeat.
    pub const fn repeats(self) -> bool {
        matches!(self, Button::Inc | Button::Dec)
    }
}

/// A debounced press, possibly an auto-repeat carrying a larger step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub delta: u16,
}

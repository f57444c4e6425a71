//! Reflow oven controller menu.
//!
//! [`Oven`] is the context the menu edits; [`MENU`] is the static tree
//! the firmware hands to [`Menu`](crate::menu::Menu).

pub mod menu_tree;
pub mod settings;

pub use menu_tree::MENU;
pub use settings::{Job, Oven, OvenSettings, Relay, RelayType, ReflowProfile};

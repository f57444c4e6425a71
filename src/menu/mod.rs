//! Table-driven menu engine.
//!
//! Firmware describes its whole menu tree as three static tables (headers,
//! items, input fields). [`Menu`] walks that tree, edits leaf values and
//! hands rendering and input polling to host collaborators.
//!
//! ## Collaborators
//!
//! - **Navigation** ([`NavInput`]): returns one logical [`NavAction`] per tick.
//! - **Display** ([`MenuDisplay`]): line 0 carries the title, line 1 the
//!   current item or the value under edit.
//! - **Values** ([`ValueRequestFn`]): per-field (and per-header) function
//!   that gets, sets and previews values kept in the host context.

pub mod defs;
pub mod editor;
pub mod engine;
pub mod format;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use defs::{FieldKind, FixedRange, InputField, ItemAction, MenuDefs, MenuHeader, MenuItem, NumericRange};
pub use engine::Menu;

/// Identifier shared by all three tables. Each table has its own id space.
pub type MenuId = i8;

/// Passing this to the resolver selects the first header (the root menu).
pub const ROOT_MENU: MenuId = -1;

/// Logical navigation actions produced by the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavAction {
    /// Nothing to process this tick.
    None,
    /// Next menu item, next list entry or larger value.
    Inc,
    /// Previous menu item, previous list entry or smaller value.
    Dec,
    /// Open the current item or confirm the value under edit.
    Sel,
    /// Leave the current menu or abandon the value under edit.
    Esc,
    /// Show the current item's help text.
    Help,
}

/// Polled navigation input.
pub trait NavInput {
    /// Returns the next action. `inc_delta` starts at
    /// [`DEFAULT_INC_DELTA`](crate::config::DEFAULT_INC_DELTA) and may be
    /// raised to request a larger numeric step for this call.
    fn next_action(&mut self, inc_delta: &mut u16) -> NavAction;
}

impl<T: NavInput + ?Sized> NavInput for &mut T {
    fn next_action(&mut self, inc_delta: &mut u16) -> NavAction {
        (**self).next_action(inc_delta)
    }
}

/// Requests sent to the display collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRequest<'a> {
    /// Clear the whole display.
    Clear,
    /// Title line. Single-line displays ignore it.
    Line0(&'a str),
    /// Dynamic line: current item or value under edit.
    Line1(&'a str),
    /// Help text for the current item, shown however the display likes.
    Help(&'a str),
}

/// Output side of the menu.
pub trait MenuDisplay {
    /// Carry out `request`. The return value is advisory; the engine ignores it.
    fn display(&mut self, request: DisplayRequest<'_>) -> bool;
}

impl<T: MenuDisplay + ?Sized> MenuDisplay for &mut T {
    fn display(&mut self, request: DisplayRequest<'_>) -> bool {
        (**self).display(request)
    }
}

/// A value crossing the value-request boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    /// No payload: action fields and header enter/exit notifications.
    Empty,
    /// Zero-based index into a pick list.
    List(u8),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    /// Fixed-point value scaled by 10^decimals.
    Fixed(i32),
}

/// Operation requested from a value-request function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueOp {
    /// Return the current value, or `None` to refuse editing it.
    Get,
    /// Persist the confirmed value.
    Set(Value),
    /// Preview a candidate value (e.g. move a servo) without persisting it.
    Try(Value),
}

/// Value-request function attached to input fields and, optionally, to
/// menu headers (GET on entering the menu, SET on leaving it).
///
/// The return value only matters for [`ValueOp::Get`].
pub type ValueRequestFn<C> = fn(&mut C, MenuId, ValueOp) -> Option<Value>;

//! Menu definition records.
//!
//! These are the rows of the three static tables. They are plain `Copy`
//! data so the resolver can hand out owned snapshots and the engine never
//! holds a reference into the tables between ticks.
//!
//! `Clone`/`Copy` are written by hand: deriving them would demand
//! `C: Clone` even though `C` only appears behind a function pointer.

use super::{MenuId, ValueRequestFn};

/// A menu node: a title plus a contiguous, ascending run of item ids.
pub struct MenuHeader<C> {
    pub id: MenuId,
    pub label: &'static str,
    /// First item id of this menu (inclusive).
    pub item_start: MenuId,
    /// Last item id of this menu (inclusive).
    pub item_end: MenuId,
    /// Called with GET when the menu is entered and SET when it is left.
    pub notify: Option<ValueRequestFn<C>>,
}

impl<C> Clone for MenuHeader<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for MenuHeader<C> {}

impl<C> MenuHeader<C> {
    pub const fn new(id: MenuId, label: &'static str, item_start: MenuId, item_end: MenuId) -> Self {
        Self {
            id,
            label,
            item_start,
            item_end,
            notify: None,
        }
    }

    pub const fn with_notify(mut self, notify: ValueRequestFn<C>) -> Self {
        self.notify = Some(notify);
        self
    }

    /// Returns `true` when `item` lies in this header's item range.
    pub fn contains(&self, item: MenuId) -> bool {
        (self.item_start..=self.item_end).contains(&item)
    }
}

/// What selecting a menu item does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemAction {
    /// Open the header with this id.
    Menu(MenuId),
    /// Edit the input field with this id.
    Input(MenuId),
}

/// A selectable entry inside a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: MenuId,
    pub label: &'static str,
    pub action: ItemAction,
    pub help: Option<&'static str>,
}

impl MenuItem {
    pub const fn menu(id: MenuId, label: &'static str, header: MenuId) -> Self {
        Self {
            id,
            label,
            action: ItemAction::Menu(header),
            help: None,
        }
    }

    pub const fn input(id: MenuId, label: &'static str, field: MenuId) -> Self {
        Self {
            id,
            label,
            action: ItemAction::Input(field),
            help: None,
        }
    }

    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Bounds and display base of an integer field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericRange {
    pub min: i32,
    pub max: i32,
    /// Display base, 2 through 16.
    pub base: u8,
}

/// Bounds and scale of a fixed-point field. Values are stored as integers
/// scaled by 10^decimals, so `12345` with 2 decimals means `123.45`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRange {
    pub min: i32,
    pub max: i32,
    pub decimals: u8,
}

/// Input type of a field together with the parameters that type needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Pick list; entries separated by [`LIST_SEPARATOR`](crate::config::LIST_SEPARATOR).
    List(&'static str),
    /// Y/N toggle.
    Bool,
    Int8(NumericRange),
    Int16(NumericRange),
    Int32(NumericRange),
    Fixed(FixedRange),
    /// Runs host code (SET) when selected; no value is edited.
    Action,
}

impl FieldKind {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::List(_) => "list",
            FieldKind::Bool => "bool",
            FieldKind::Int8(_) => "int8",
            FieldKind::Int16(_) => "int16",
            FieldKind::Int32(_) => "int32",
            FieldKind::Fixed(_) => "fixed",
            FieldKind::Action => "action",
        }
    }
}

/// A leaf value description.
pub struct InputField<C> {
    pub id: MenuId,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Width of the displayed value between the delimiters.
    pub width: u8,
    pub request: ValueRequestFn<C>,
}

impl<C> Clone for InputField<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for InputField<C> {}

impl<C> InputField<C> {
    pub const fn new(
        id: MenuId,
        label: &'static str,
        kind: FieldKind,
        width: u8,
        request: ValueRequestFn<C>,
    ) -> Self {
        Self {
            id,
            label,
            kind,
            width,
            request,
        }
    }
}

/// The three definition tables. Borrowed by the engine, never mutated.
pub struct MenuDefs<'d, C> {
    pub headers: &'d [MenuHeader<C>],
    pub items: &'d [MenuItem],
    pub fields: &'d [InputField<C>],
}

impl<C> Clone for MenuDefs<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for MenuDefs<'_, C> {}

impl<'d, C> MenuDefs<'d, C> {
    pub const fn new(
        headers: &'d [MenuHeader<C>],
        items: &'d [MenuItem],
        fields: &'d [InputField<C>],
    ) -> Self {
        Self {
            headers,
            items,
            fields,
        }
    }
}

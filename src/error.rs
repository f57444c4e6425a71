//! Unified error type for reflow-menu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! Only configuration problems are errors. Everything that can go wrong
//! while the menu is running (missing records, vetoed edits, a full menu
//! stack) is recovered in place and logged instead.

use crate::config::MAX_LIST_ENTRIES;
use crate::menu::MenuId;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The static menu tables are inconsistent.
    Definition(DefinitionError),
}

/// Which definition table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Table {
    Headers,
    Items,
    Fields,
}

/// Problems found while validating the menu tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DefinitionError {
    /// The header table is empty, so there is no root menu.
    NoHeaders,

    /// Two records in one table share an id.
    DuplicateId { table: Table, id: MenuId },

    /// A header's item range ends before it starts.
    InvertedItemRange { header: MenuId },

    /// A header's item range names an item id that is not in the item table.
    MissingItem { header: MenuId, item: MenuId },

    /// A pick list has an empty entry, e.g. `"a||b"` or a trailing `|`.
    ListShapeMismatch { field: MenuId },

    /// A pick list has more entries than a `Value::List` index can address.
    ListTooLong { field: MenuId },

    /// An integer field uses a display base outside 2..=16.
    InvalidBase { field: MenuId, base: u8 },

    /// A fixed-point field asks for more decimals than an `i32` can carry.
    InvalidDecimals { field: MenuId, decimals: u8 },

    /// A numeric field's minimum is above its maximum.
    InvertedValueRange { field: MenuId },

    /// A numeric field's bounds do not fit its declared integer width.
    RangeExceedsWidth { field: MenuId },
}

// Convenience conversions

impl From<DefinitionError> for Error {
    fn from(e: DefinitionError) -> Self {
        Error::Definition(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Definition(e) => write!(f, "invalid menu definition: {e}"),
        }
    }
}

impl core::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            DefinitionError::NoHeaders => f.write_str("no menu headers defined"),
            DefinitionError::DuplicateId { table, id } => {
                write!(f, "duplicate id {id} in {table:?} table")
            }
            DefinitionError::InvertedItemRange { header } => {
                write!(f, "header {header} has an inverted item range")
            }
            DefinitionError::MissingItem { header, item } => {
                write!(f, "header {header} names missing item {item}")
            }
            DefinitionError::ListShapeMismatch { field } => {
                write!(f, "field {field} has an empty list entry")
            }
            DefinitionError::ListTooLong { field } => {
                write!(f, "field {field} has more than {MAX_LIST_ENTRIES} list entries")
            }
            DefinitionError::InvalidBase { field, base } => {
                write!(f, "field {field} uses unsupported base {base}")
            }
            DefinitionError::InvalidDecimals { field, decimals } => {
                write!(f, "field {field} uses unsupported decimals {decimals}")
            }
            DefinitionError::InvertedValueRange { field } => {
                write!(f, "field {field} has min above max")
            }
            DefinitionError::RangeExceedsWidth { field } => {
                write!(f, "field {field} range does not fit its width")
            }
        }
    }
}

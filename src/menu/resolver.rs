//! Lookup of definition records by id.
//!
//! The tables are small, so every lookup is a linear scan that copies the
//! first match out. A miss is an ordinary outcome (`None`); callers decide
//! how to recover.

use super::defs::{FieldKind, InputField, MenuDefs, MenuHeader, MenuItem};
use super::format::list_count;
use super::{MenuId, ROOT_MENU};
use crate::config::{
    HEADER_LABEL_SIZE, INPUT_LABEL_SIZE, ITEM_LABEL_SIZE, LIST_SEPARATOR, MAX_DECIMALS,
    MAX_LIST_ENTRIES,
};
use crate::error::{DefinitionError, Table};

impl<C> MenuDefs<'_, C> {
    /// Find a header by id. [`ROOT_MENU`] selects the first header.
    pub fn find_header(&self, id: MenuId) -> Option<MenuHeader<C>> {
        if id == ROOT_MENU {
            return self.headers.first().copied();
        }
        self.headers.iter().find(|h| h.id == id).copied()
    }

    pub fn find_item(&self, id: MenuId) -> Option<MenuItem> {
        self.items.iter().find(|i| i.id == id).copied()
    }

    pub fn find_field(&self, id: MenuId) -> Option<InputField<C>> {
        self.fields.iter().find(|f| f.id == id).copied()
    }

    /// Check the tables once, at configuration time.
    ///
    /// Every header's item range must be ascending and fully present in the
    /// item table, so cursor movement can never land on a missing item.
    /// Item targets (submenus and fields) are not checked here: a dangling
    /// target is recovered at runtime by staying in the current menu.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.headers.is_empty() {
            return Err(DefinitionError::NoHeaders);
        }

        check_unique(Table::Headers, self.headers.iter().map(|h| h.id))?;
        check_unique(Table::Items, self.items.iter().map(|i| i.id))?;
        check_unique(Table::Fields, self.fields.iter().map(|f| f.id))?;

        for header in self.headers {
            warn_long_label(header.label, HEADER_LABEL_SIZE);
            if header.item_end < header.item_start {
                return Err(DefinitionError::InvertedItemRange { header: header.id });
            }
            for item in header.item_start..=header.item_end {
                if self.find_item(item).is_none() {
                    return Err(DefinitionError::MissingItem {
                        header: header.id,
                        item,
                    });
                }
            }
        }

        for item in self.items {
            warn_long_label(item.label, ITEM_LABEL_SIZE);
        }

        for field in self.fields {
            warn_long_label(field.label, INPUT_LABEL_SIZE);
            check_field(field)?;
        }

        Ok(())
    }
}

/// Long labels still work; they just crowd the value off a small display.
fn warn_long_label(label: &str, size: usize) {
    if label.chars().count() > size {
        warn!("menu: label \"{}\" is longer than {} characters", label, size);
    }
}

fn check_unique(table: Table, ids: impl Iterator<Item = MenuId> + Clone) -> Result<(), DefinitionError> {
    for (n, id) in ids.clone().enumerate() {
        if ids.clone().skip(n + 1).any(|other| other == id) {
            return Err(DefinitionError::DuplicateId { table, id });
        }
    }
    Ok(())
}

fn check_field<C>(field: &InputField<C>) -> Result<(), DefinitionError> {
    let id = field.id;
    let (min, max, width_bounds) = match field.kind {
        FieldKind::List(list) => {
            // An empty string is a list with no entries; that is handled when editing.
            if !list.is_empty() && list.split(LIST_SEPARATOR).any(str::is_empty) {
                return Err(DefinitionError::ListShapeMismatch { field: id });
            }
            if list_count(list) > MAX_LIST_ENTRIES {
                return Err(DefinitionError::ListTooLong { field: id });
            }
            return Ok(());
        }
        FieldKind::Bool | FieldKind::Action => return Ok(()),
        FieldKind::Int8(r) => (r.min, r.max, Some((i32::from(i8::MIN), i32::from(i8::MAX)))),
        FieldKind::Int16(r) => (r.min, r.max, Some((i32::from(i16::MIN), i32::from(i16::MAX)))),
        FieldKind::Int32(r) => (r.min, r.max, None),
        FieldKind::Fixed(r) => {
            if r.decimals > MAX_DECIMALS {
                return Err(DefinitionError::InvalidDecimals {
                    field: id,
                    decimals: r.decimals,
                });
            }
            (r.min, r.max, None)
        }
    };

    if let FieldKind::Int8(r) | FieldKind::Int16(r) | FieldKind::Int32(r) = field.kind {
        if !(2..=16).contains(&r.base) {
            return Err(DefinitionError::InvalidBase {
                field: id,
                base: r.base,
            });
        }
    }

    if min > max {
        return Err(DefinitionError::InvertedValueRange { field: id });
    }

    if let Some((lo, hi)) = width_bounds {
        if min < lo || max > hi {
            return Err(DefinitionError::RangeExceedsWidth { field: id });
        }
    }

    Ok(())
}

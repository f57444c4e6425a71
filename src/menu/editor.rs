//! Value editors.
//!
//! One session edits one input field. It seeds a working copy from the
//! field's value-request function (GET), adjusts it on INC/DEC, writes it
//! back on SELECT (SET) and drops it on ESCAPE. Numeric fields also send
//! every adjusted candidate out as a TRY so the host can preview it on live
//! hardware; the backing value only ever changes on SET.

use super::defs::{FieldKind, InputField};
use super::format::{self, Text};
use super::{DisplayRequest, MenuDisplay, NavAction, Value, ValueOp};
use crate::config::{BOOL_FALSE, BOOL_TRUE};
use crate::ui::input_logic::{select_next, select_prev};

/// How a call into the editor left the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditOutcome {
    /// Still editing.
    Continue,
    /// The value was written back with SET (or the action ran).
    Committed,
    /// Editing ended without SET: escaped, vetoed or impossible.
    Cancelled,
}

impl EditOutcome {
    pub fn is_finished(self) -> bool {
        self != EditOutcome::Continue
    }
}

/// Working copy of the value under edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Working {
    /// Nothing loaded yet.
    Unset,
    List { index: i32, count: i32 },
    Bool(bool),
    /// Integer or fixed-point accumulator.
    Number(i32),
    Action,
}

/// Per-call collaborators lent to the editor by the engine.
pub struct EditEnv<'a, C, D> {
    pub context: &'a mut C,
    pub display: &'a mut D,
    /// Wrap list selection at both ends instead of clamping.
    pub wrap: bool,
    /// Step for numeric INC/DEC.
    pub delta: u16,
}

/// State of one field-editing interaction.
pub struct EditSession<C> {
    field: InputField<C>,
    working: Working,
}

impl<C> EditSession<C> {
    pub fn new(field: InputField<C>) -> Self {
        Self {
            field,
            working: Working::Unset,
        }
    }

    pub fn field(&self) -> &InputField<C> {
        &self.field
    }

    /// The working copy as it would be written back on SELECT.
    pub fn working_value(&self) -> Option<Value> {
        match self.working {
            Working::Unset => None,
            Working::Action => Some(Value::Empty),
            _ => Some(self.outgoing()),
        }
    }

    /// Begin the session: load the value and render it.
    pub fn start<D: MenuDisplay>(&mut self, env: &mut EditEnv<'_, C, D>) -> EditOutcome {
        let id = self.field.id;

        self.working = match self.field.kind {
            FieldKind::Action => Working::Action,
            FieldKind::List(list) => {
                let count = format::list_count(list) as i32;
                if count == 0 {
                    warn!("edit: field {} has an empty list", id);
                    return EditOutcome::Cancelled;
                }
                match self.get(env) {
                    Some(Value::List(index)) => {
                        let index = i32::from(index);
                        // An out-of-range index from the host restarts at the first entry.
                        let index = if index < count { index } else { 0 };
                        Working::List { index, count }
                    }
                    other => return self.refuse(other),
                }
            }
            FieldKind::Bool => match self.get(env) {
                Some(Value::Bool(flag)) => Working::Bool(flag),
                other => return self.refuse(other),
            },
            kind => match self.get(env).map(|v| seed_number(kind, v)) {
                Some(Some(acc)) => Working::Number(acc),
                Some(None) => return self.refuse(Some(Value::Empty)),
                None => return self.refuse(None),
            },
        };

        debug!("edit: start field {} ({})", id, self.field.kind.name());
        self.render(env);
        EditOutcome::Continue
    }

    /// Apply one navigation action to the running session.
    pub fn handle<D: MenuDisplay>(&mut self, nav: NavAction, env: &mut EditEnv<'_, C, D>) -> EditOutcome {
        match nav {
            NavAction::Inc | NavAction::Dec => {
                let up = nav == NavAction::Inc;
                self.adjust(up, env);
                EditOutcome::Continue
            }
            NavAction::Sel => self.commit(env),
            NavAction::Esc => {
                debug!("edit: field {} cancelled", self.field.id);
                EditOutcome::Cancelled
            }
            NavAction::Help | NavAction::None => EditOutcome::Continue,
        }
    }

    fn adjust<D: MenuDisplay>(&mut self, up: bool, env: &mut EditEnv<'_, C, D>) {
        match (&mut self.working, self.field.kind) {
            (Working::List { index, count }, _) => {
                *index = if up {
                    select_next(*index, 0, *count - 1, env.wrap)
                } else {
                    select_prev(*index, 0, *count - 1, env.wrap)
                };
            }
            (Working::Bool(flag), _) => *flag = !*flag,
            (Working::Number(acc), kind) => {
                let Some((min, max)) = bounds(kind) else {
                    return;
                };
                *acc = if up {
                    step_up(*acc, env.delta, max)
                } else {
                    step_down(*acc, env.delta, min)
                };
            }
            (Working::Action | Working::Unset, _) => return,
        }

        self.render(env);
        if matches!(self.working, Working::Number(_)) {
            self.preview(env);
        }
    }

    fn commit<D: MenuDisplay>(&mut self, env: &mut EditEnv<'_, C, D>) -> EditOutcome {
        let value = match self.working {
            Working::Unset => return EditOutcome::Cancelled,
            Working::Action => Value::Empty,
            _ => self.outgoing(),
        };
        debug!("edit: field {} committed", self.field.id);
        (self.field.request)(env.context, self.field.id, ValueOp::Set(value));
        EditOutcome::Committed
    }

    /// Hand the current candidate to the host as TRY. The host only
    /// previews it; the backing value keeps what GET returned.
    fn preview<D>(&self, env: &mut EditEnv<'_, C, D>) {
        (self.field.request)(env.context, self.field.id, ValueOp::Try(self.outgoing()));
    }

    fn get<D>(&self, env: &mut EditEnv<'_, C, D>) -> Option<Value> {
        (self.field.request)(env.context, self.field.id, ValueOp::Get)
    }

    fn refuse(&self, got: Option<Value>) -> EditOutcome {
        match got {
            None => warn!("edit: field {} refused by host", self.field.id),
            Some(_) => warn!(
                "edit: field {} got a value that is not {}",
                self.field.id,
                self.field.kind.name()
            ),
        }
        EditOutcome::Cancelled
    }

    /// The working copy narrowed to the field's declared type.
    fn outgoing(&self) -> Value {
        match (self.working, self.field.kind) {
            // Lists are validated to at most MAX_LIST_ENTRIES, so the index fits.
            (Working::List { index, .. }, _) => Value::List(u8::try_from(index).unwrap_or(u8::MAX)),
            (Working::Bool(flag), _) => Value::Bool(flag),
            // Bounds are validated to fit the width, so the casts are lossless.
            (Working::Number(acc), FieldKind::Int8(_)) => Value::Int8(acc as i8),
            (Working::Number(acc), FieldKind::Int16(_)) => Value::Int16(acc as i16),
            (Working::Number(acc), FieldKind::Int32(_)) => Value::Int32(acc),
            (Working::Number(acc), FieldKind::Fixed(_)) => Value::Fixed(acc),
            _ => Value::Empty,
        }
    }

    fn render<D: MenuDisplay>(&self, env: &mut EditEnv<'_, C, D>) {
        let label = self.field.label;
        let width = self.field.width;

        let line: Text = match (self.working, self.field.kind) {
            (Working::List { index, .. }, FieldKind::List(list)) => {
                format::wrap_field(label, &format::list_item(list, index as usize, width))
            }
            (Working::Bool(flag), _) => {
                format::wrap_field(label, if flag { BOOL_TRUE } else { BOOL_FALSE })
            }
            (Working::Number(acc), FieldKind::Fixed(r)) => {
                format::wrap_field(label, &format::fixed_to_string(acc, width, r.decimals))
            }
            (Working::Number(acc), FieldKind::Int8(r) | FieldKind::Int16(r) | FieldKind::Int32(r)) => {
                format::wrap_field(label, &format::number_to_string(acc, width, r.base, ' '))
            }
            (Working::Action, _) => format::wrap_action(label),
            _ => return,
        };

        env.display.display(DisplayRequest::Line1(&line));
    }
}

fn seed_number(kind: FieldKind, value: Value) -> Option<i32> {
    match (kind, value) {
        (FieldKind::Int8(_), Value::Int8(v)) => Some(i32::from(v)),
        (FieldKind::Int16(_), Value::Int16(v)) => Some(i32::from(v)),
        (FieldKind::Int32(_), Value::Int32(v)) => Some(v),
        (FieldKind::Fixed(_), Value::Fixed(v)) => Some(v),
        _ => None,
    }
}

fn bounds(kind: FieldKind) -> Option<(i32, i32)> {
    match kind {
        FieldKind::Int8(r) | FieldKind::Int16(r) | FieldKind::Int32(r) => Some((r.min, r.max)),
        FieldKind::Fixed(r) => Some((r.min, r.max)),
        _ => None,
    }
}

/// Add `delta`, landing exactly on `max` once the step would reach or pass it.
fn step_up(acc: i32, delta: u16, max: i32) -> i32 {
    let next = i64::from(acc) + i64::from(delta);
    if next < i64::from(max) {
        next as i32
    } else {
        max
    }
}

/// Subtract `delta`, landing exactly on `min` once the step would reach or pass it.
fn step_down(acc: i32, delta: u16, min: i32) -> i32 {
    let next = i64::from(acc) - i64::from(delta);
    if next > i64::from(min) {
        next as i32
    } else {
        min
    }
}

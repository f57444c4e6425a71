//! Behaviour tests for the menu engine and value editors.
//!
//! A scripted navigation input feeds one action per tick and a recording
//! display captures every request, so each test reads as a keypress script
//! followed by what the user would have seen.

use std::collections::VecDeque;

use super::{
    DisplayRequest, FieldKind, FixedRange, InputField, Menu, MenuDefs, MenuDisplay, MenuHeader,
    MenuId, MenuItem, NavAction, NavInput, NumericRange, Value, ValueOp,
};
use crate::error::{DefinitionError, Error};

// ═══════════════════════════════════════════════════════════════════════════
// Test doubles
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct ScriptedNav {
    script: VecDeque<(NavAction, u16)>,
}

impl ScriptedNav {
    fn press(&mut self, actions: &[NavAction]) {
        self.script.extend(actions.iter().map(|&a| (a, 1)));
    }

    fn press_with_delta(&mut self, action: NavAction, delta: u16) {
        self.script.push_back((action, delta));
    }
}

impl NavInput for ScriptedNav {
    fn next_action(&mut self, inc_delta: &mut u16) -> NavAction {
        match self.script.pop_front() {
            Some((action, delta)) => {
                *inc_delta = delta;
                action
            }
            None => NavAction::None,
        }
    }
}

#[derive(Default)]
struct RecordingDisplay {
    lines: Vec<String>,
}

impl RecordingDisplay {
    fn last_line1(&self) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .find_map(|l| l.strip_prefix("1:"))
    }
}

impl MenuDisplay for RecordingDisplay {
    fn display(&mut self, request: DisplayRequest<'_>) -> bool {
        let line = match request {
            DisplayRequest::Clear => "clear".to_string(),
            DisplayRequest::Line0(s) => format!("0:{s}"),
            DisplayRequest::Line1(s) => format!("1:{s}"),
            DisplayRequest::Help(s) => format!("help:{s}"),
        };
        self.lines.push(line);
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Menu tree under test
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Ctx {
    level: u8,
    count: i16,
    flag: bool,
    offset: i32,
    wide: i32,
    actions: u32,
    veto: bool,
    calls: Vec<(MenuId, ValueOp)>,
}

impl Ctx {
    fn sets(&self, id: MenuId) -> Vec<Value> {
        self.calls
            .iter()
            .filter_map(|&(i, op)| match op {
                ValueOp::Set(v) if i == id => Some(v),
                _ => None,
            })
            .collect()
    }

    fn tries(&self, id: MenuId) -> Vec<Value> {
        self.calls
            .iter()
            .filter_map(|&(i, op)| match op {
                ValueOp::Try(v) if i == id => Some(v),
                _ => None,
            })
            .collect()
    }
}

const F_LEVEL: MenuId = 1;
const F_COUNT: MenuId = 2;
const F_FLAG: MenuId = 3;
const F_GO: MenuId = 4;
const F_EMPTY: MenuId = 5;
const F_OFFSET: MenuId = 6;
const H_SUB: MenuId = 9;

fn level_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    match op {
        ValueOp::Get if ctx.veto => None,
        ValueOp::Get => Some(Value::List(ctx.level)),
        ValueOp::Set(Value::List(v)) => {
            ctx.level = v;
            None
        }
        _ => None,
    }
}

fn count_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    match op {
        ValueOp::Get => Some(Value::Int16(ctx.count)),
        ValueOp::Set(Value::Int16(v)) => {
            ctx.count = v;
            None
        }
        _ => None,
    }
}

fn flag_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    match op {
        ValueOp::Get => Some(Value::Bool(ctx.flag)),
        ValueOp::Set(Value::Bool(v)) => {
            ctx.flag = v;
            None
        }
        _ => None,
    }
}

fn go_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    if let ValueOp::Set(_) = op {
        ctx.actions += 1;
    }
    None
}

fn offset_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    match op {
        ValueOp::Get => Some(Value::Fixed(ctx.offset)),
        ValueOp::Set(Value::Fixed(v)) => {
            ctx.offset = v;
            None
        }
        _ => None,
    }
}

fn wide_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    match op {
        ValueOp::Get => Some(Value::Int32(ctx.wide)),
        ValueOp::Set(Value::Int32(v)) => {
            ctx.wide = v;
            None
        }
        _ => None,
    }
}

/// Returns the wrong variant on GET.
fn confused_request(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    Some(Value::Bool(true))
}

fn sub_notify(ctx: &mut Ctx, id: MenuId, op: ValueOp) -> Option<Value> {
    ctx.calls.push((id, op));
    None
}

static HEADERS: [MenuHeader<Ctx>; 6] = [
    MenuHeader::new(0, "Main", 10, 15),
    MenuHeader::new(H_SUB, "Sub", 20, 24).with_notify(sub_notify),
    MenuHeader::new(2, "L2", 30, 30),
    MenuHeader::new(3, "L3", 40, 40),
    MenuHeader::new(4, "L4", 50, 50),
    MenuHeader::new(5, "L5", 60, 60),
];

static ITEMS: [MenuItem; 15] = [
    MenuItem::input(10, "Level", F_LEVEL).with_help("Pick a level"),
    MenuItem::input(11, "Count", F_COUNT),
    MenuItem::menu(12, "Deeper", 2),
    MenuItem::menu(13, "Sub", H_SUB),
    MenuItem::input(14, "Ghost", 99),
    MenuItem::menu(15, "Lost", 99),
    MenuItem::input(20, "Flag", F_FLAG),
    MenuItem::input(21, "Go", F_GO),
    MenuItem::input(22, "Empty", F_EMPTY),
    MenuItem::input(23, "Offset", F_OFFSET),
    MenuItem::input(24, "Confused", 7),
    MenuItem::menu(30, "To L3", 3),
    MenuItem::menu(40, "To L4", 4),
    MenuItem::menu(50, "To L5", 5),
    MenuItem::input(60, "Deep", F_COUNT),
];

static FIELDS: [InputField<Ctx>; 7] = [
    InputField::new(F_LEVEL, "Lvl", FieldKind::List("Off|Low|High"), 4, level_request),
    InputField::new(
        F_COUNT,
        "Cnt",
        FieldKind::Int16(NumericRange { min: 0, max: 100, base: 10 }),
        3,
        count_request,
    ),
    InputField::new(F_FLAG, "Flag", FieldKind::Bool, 1, flag_request),
    InputField::new(F_GO, "Go", FieldKind::Action, 0, go_request),
    InputField::new(F_EMPTY, "Empty", FieldKind::List(""), 4, level_request),
    InputField::new(
        F_OFFSET,
        "Ofs",
        FieldKind::Fixed(FixedRange { min: -500, max: 500, decimals: 2 }),
        6,
        offset_request,
    ),
    InputField::new(7, "Cnf", FieldKind::Int8(NumericRange { min: 0, max: 9, base: 10 }), 1, confused_request),
];

const F_WIDE: MenuId = 8;

static HEX_HEADERS: [MenuHeader<Ctx>; 1] = [MenuHeader::new(0, "Hex", 0, 0)];
static HEX_ITEMS: [MenuItem; 1] = [MenuItem::input(0, "Wide", F_WIDE)];
static HEX_FIELDS: [InputField<Ctx>; 1] = [InputField::new(
    F_WIDE,
    "Wid",
    FieldKind::Int32(NumericRange { min: -0x10, max: 0xFF, base: 16 }),
    3,
    wide_request,
)];

type TestMenu = Menu<'static, Ctx, ScriptedNav, RecordingDisplay>;

fn menu_with(ctx: Ctx) -> TestMenu {
    Menu::new(
        MenuDefs::new(&HEADERS, &ITEMS, &FIELDS),
        ctx,
        ScriptedNav::default(),
        RecordingDisplay::default(),
    )
    .unwrap()
}

/// A started menu at the root.
fn started(ctx: Ctx) -> TestMenu {
    let mut menu = menu_with(ctx);
    assert!(menu.run(true, 0));
    menu
}

/// Feed `actions` one per tick, 20 ms apart, starting at `now`.
fn press(menu: &mut TestMenu, now: &mut u64, actions: &[NavAction]) -> bool {
    menu.nav_input_mut().press(actions);
    let mut running = menu.is_running();
    for _ in actions {
        *now += 20;
        running = menu.run(false, *now);
    }
    running
}

fn line1(menu: &mut TestMenu) -> String {
    menu.display_mut().last_line1().unwrap_or_default().to_string()
}

use NavAction::{Dec, Esc, Help, Inc, Sel};

// ═══════════════════════════════════════════════════════════════════════════
// Construction and start
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn construction_rejects_empty_header_table() {
    let result = Menu::new(
        MenuDefs::<Ctx>::new(&[], &ITEMS, &FIELDS),
        Ctx::default(),
        ScriptedNav::default(),
        RecordingDisplay::default(),
    );
    assert!(matches!(result, Err(Error::Definition(DefinitionError::NoHeaders))));
}

#[test]
fn idle_menu_does_nothing_without_start() {
    let mut menu = menu_with(Ctx::default());
    menu.nav_input_mut().press(&[Sel]);
    assert!(!menu.run(false, 0));
    assert!(menu.display_mut().lines.is_empty());
}

#[test]
fn start_shows_root_title_and_first_item() {
    let mut menu = started(Ctx::default());
    assert_eq!(menu.display_mut().lines, ["clear", "0:Main", "1:<Level>"]);
    assert!(menu.is_in_menu());
    assert_eq!(menu.depth(), 0);
    assert_eq!(menu.current_header_id(), Some(0));
    assert_eq!(menu.current_item_id(), Some(10));
}

#[test]
fn auto_start_waits_for_select() {
    let mut menu = menu_with(Ctx::default());
    menu.set_auto_start(true);
    menu.nav_input_mut().press(&[Inc, Sel]);

    assert!(!menu.run(false, 0));
    assert!(menu.run(false, 20));
    assert_eq!(menu.current_item_id(), Some(10));
}

#[test]
fn start_while_running_returns_to_root() {
    let mut now = 0;
    let mut menu = started(Ctx::default());
    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel]);
    assert_eq!(menu.current_header_id(), Some(H_SUB));

    assert!(menu.run(true, now));
    assert_eq!(menu.depth(), 0);
    assert_eq!(menu.current_item_id(), Some(10));
}

// ═══════════════════════════════════════════════════════════════════════════
// Menu navigation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn cursor_clamps_at_both_ends() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Dec, Dec]);
    assert_eq!(menu.current_item_id(), Some(10));

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Inc, Inc, Inc, Inc]);
    assert_eq!(menu.current_item_id(), Some(15));
    assert_eq!(line1(&mut menu), "<Lost>");
}

#[test]
fn cursor_wraps_when_enabled() {
    let mut now = 0;
    let mut menu = started(Ctx::default());
    menu.set_menu_wrap(true);

    press(&mut menu, &mut now, &[Dec]);
    assert_eq!(menu.current_item_id(), Some(15));
    press(&mut menu, &mut now, &[Inc]);
    assert_eq!(menu.current_item_id(), Some(10));
}

#[test]
fn submenu_enter_and_escape_notify_header() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel]);
    assert_eq!(menu.current_header_id(), Some(H_SUB));
    assert_eq!(menu.depth(), 1);
    assert_eq!(menu.current_item_id(), Some(20));
    assert_eq!(menu.context().calls, [(H_SUB, ValueOp::Get)]);

    press(&mut menu, &mut now, &[Esc]);
    assert_eq!(menu.depth(), 0);
    assert_eq!(menu.current_item_id(), Some(13), "parent cursor is kept");
    assert_eq!(
        menu.context().calls.last(),
        Some(&(H_SUB, ValueOp::Set(Value::Empty)))
    );
}

#[test]
fn escape_at_root_ends_menu_and_clears() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    assert!(!press(&mut menu, &mut now, &[Esc]));
    assert!(!menu.is_running());
    assert_eq!(menu.display_mut().lines.last().map(String::as_str), Some("clear"));
}

#[test]
fn push_beyond_stack_capacity_is_ignored() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Sel, Sel, Sel]);
    assert_eq!(menu.current_header_id(), Some(4));
    assert_eq!(menu.depth(), 3);
    let item = menu.current_item_id();
    let drawn = menu.display_mut().lines.len();

    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(menu.current_header_id(), Some(4));
    assert_eq!(menu.current_item_id(), item);
    assert_eq!(menu.display_mut().lines.len(), drawn);
    assert!(menu.is_in_menu());
}

#[test]
fn dangling_targets_leave_menu_unchanged() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Inc, Sel]);
    assert_eq!(menu.current_item_id(), Some(14));
    assert!(menu.is_in_menu());

    press(&mut menu, &mut now, &[Inc, Sel]);
    assert_eq!(menu.current_item_id(), Some(15));
    assert_eq!(menu.depth(), 0);
}

#[test]
fn help_shows_text_and_redraws_item() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Help]);
    let lines = &menu.display_mut().lines;
    assert_eq!(lines[lines.len() - 2..], ["help:Pick a level", "1:<Level>"]);

    let before = menu.display_mut().lines.len();
    press(&mut menu, &mut now, &[Inc, Help]);
    assert_eq!(menu.display_mut().lines.len(), before + 1, "no help for Count");
}

// ═══════════════════════════════════════════════════════════════════════════
// Editing
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn list_edit_commits_last_choice() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Sel]);
    assert!(menu.is_in_edit());
    assert_eq!(line1(&mut menu), "Lvl:[Off ]");

    press(&mut menu, &mut now, &[Inc, Inc]);
    assert_eq!(line1(&mut menu), "Lvl:[High]");
    let session = menu.editing().map(|s| (s.field().id, s.working_value()));
    assert_eq!(session, Some((F_LEVEL, Some(Value::List(2)))));
    assert_eq!(menu.context().level, 0, "nothing written before select");

    press(&mut menu, &mut now, &[Sel]);
    assert!(menu.is_in_menu());
    assert_eq!(menu.context().level, 2);
    assert_eq!(menu.context().sets(F_LEVEL), [Value::List(2)]);
    assert_eq!(line1(&mut menu), "<Level>");
}

#[test]
fn list_edit_clamps_or_wraps() {
    let mut now = 0;
    let mut menu = started(Ctx::default());
    press(&mut menu, &mut now, &[Sel, Dec]);
    assert_eq!(line1(&mut menu), "Lvl:[Off ]");
    press(&mut menu, &mut now, &[Esc]);

    menu.set_menu_wrap(true);
    press(&mut menu, &mut now, &[Sel, Dec]);
    assert_eq!(line1(&mut menu), "Lvl:[High]");
}

#[test]
fn cancelled_edit_writes_nothing() {
    let mut now = 0;
    let mut menu = started(Ctx {
        level: 1,
        ..Ctx::default()
    });

    press(&mut menu, &mut now, &[Sel, Inc, Esc]);
    assert!(menu.is_in_menu());
    assert_eq!(menu.context().level, 1);
    assert!(menu.context().sets(F_LEVEL).is_empty());
}

#[test]
fn out_of_range_list_index_starts_at_first_entry() {
    let mut now = 0;
    let mut menu = started(Ctx {
        level: 9,
        ..Ctx::default()
    });
    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(line1(&mut menu), "Lvl:[Off ]");
}

#[test]
fn numeric_edit_clamps_and_previews() {
    let mut now = 0;
    let mut menu = started(Ctx {
        count: 95,
        ..Ctx::default()
    });

    press(&mut menu, &mut now, &[Inc, Sel]);
    assert_eq!(line1(&mut menu), "Cnt:[ 95]");

    menu.nav_input_mut().press_with_delta(Inc, 10);
    now += 20;
    menu.run(false, now);
    assert_eq!(line1(&mut menu), "Cnt:[100]");
    assert_eq!(menu.context().count, 95, "TRY leaves the value alone");
    assert_eq!(menu.context().tries(F_COUNT), [Value::Int16(100)]);

    press(&mut menu, &mut now, &[Inc, Sel]);
    assert_eq!(menu.context().count, 100);
    assert_eq!(menu.context().sets(F_COUNT), [Value::Int16(100)]);
}

#[test]
fn numeric_edit_clamps_to_minimum() {
    let mut now = 0;
    let mut menu = started(Ctx {
        count: 3,
        ..Ctx::default()
    });

    press(&mut menu, &mut now, &[Inc, Sel]);
    menu.nav_input_mut().press_with_delta(Dec, 10);
    now += 20;
    menu.run(false, now);
    assert_eq!(line1(&mut menu), "Cnt:[  0]");
    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(menu.context().count, 0);
}

#[test]
fn fixed_point_edit_renders_decimals() {
    let mut now = 0;
    let mut menu = started(Ctx {
        offset: -5,
        ..Ctx::default()
    });

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Inc, Inc, Inc, Sel]);
    assert_eq!(line1(&mut menu), "Ofs:[ -0.05]");

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Inc, Inc, Inc]);
    assert_eq!(line1(&mut menu), "Ofs:[  0.01]");
    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(menu.context().offset, 1);
}

#[test]
fn hex_int32_edit_clamps_and_commits_full_width() {
    let mut now = 0;
    let mut menu = Menu::new(
        MenuDefs::new(&HEX_HEADERS, &HEX_ITEMS, &HEX_FIELDS),
        Ctx {
            wide: 0xF0,
            ..Ctx::default()
        },
        ScriptedNav::default(),
        RecordingDisplay::default(),
    )
    .unwrap();
    assert!(menu.run(true, now));

    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(line1(&mut menu), "Wid:[ F0]");

    menu.nav_input_mut().press_with_delta(Inc, 0x20);
    now += 20;
    menu.run(false, now);
    assert_eq!(line1(&mut menu), "Wid:[ FF]");
    press(&mut menu, &mut now, &[Inc]);
    assert_eq!(line1(&mut menu), "Wid:[ FF]");

    menu.nav_input_mut().press_with_delta(Dec, 0x200);
    now += 20;
    menu.run(false, now);
    assert_eq!(line1(&mut menu), "Wid:[-10]");
    assert_eq!(menu.context().wide, 0xF0, "TRY leaves the stored value alone");

    press(&mut menu, &mut now, &[Sel]);
    assert_eq!(menu.context().sets(F_WIDE), [Value::Int32(-0x10)]);
    assert_eq!(menu.context().tries(F_WIDE).last(), Some(&Value::Int32(-0x10)));
    assert_eq!(menu.context().wide, -0x10);
}

#[test]
fn bool_edit_toggles() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Sel]);
    assert_eq!(line1(&mut menu), "Flag:[N]");
    press(&mut menu, &mut now, &[Inc]);
    assert_eq!(line1(&mut menu), "Flag:[Y]");
    assert!(menu.context().tries(F_FLAG).is_empty());
    press(&mut menu, &mut now, &[Sel]);
    assert!(menu.context().flag);
}

#[test]
fn action_field_runs_once_on_select() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Inc, Sel]);
    assert!(menu.is_in_edit());
    assert_eq!(line1(&mut menu), "[Go]");
    assert_eq!(menu.context().actions, 0);

    press(&mut menu, &mut now, &[Sel]);
    assert!(menu.is_in_menu());
    assert_eq!(menu.context().actions, 1);
    assert_eq!(menu.context().sets(F_GO), [Value::Empty]);
    assert!(!menu.context().calls.contains(&(F_GO, ValueOp::Get)));
}

#[test]
fn refused_get_does_not_enter_edit() {
    let mut now = 0;
    let mut menu = started(Ctx {
        veto: true,
        ..Ctx::default()
    });

    press(&mut menu, &mut now, &[Sel]);
    assert!(menu.is_in_menu());
    assert_eq!(menu.current_item_id(), Some(10));
    assert!(menu.context().sets(F_LEVEL).is_empty());
}

#[test]
fn mismatched_get_does_not_enter_edit() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Inc, Inc, Inc, Inc, Sel]);
    assert_eq!(menu.current_item_id(), Some(24));
    assert!(menu.is_in_menu());
}

#[test]
fn empty_list_does_not_enter_edit() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Inc, Inc, Sel]);
    assert_eq!(menu.current_item_id(), Some(22));
    assert!(menu.is_in_menu());
    assert!(!menu.context().calls.contains(&(F_EMPTY, ValueOp::Get)));
}

#[test]
fn ending_an_edit_reenters_the_menu_fresh() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Inc, Inc, Inc, Sel, Sel, Sel]);
    let notifies = menu
        .context()
        .calls
        .iter()
        .filter(|c| **c == (H_SUB, ValueOp::Get))
        .count();
    assert_eq!(notifies, 2);
    assert_eq!(menu.current_item_id(), Some(20));
}

#[test]
fn reset_drops_edit_without_writing() {
    let mut now = 0;
    let mut menu = started(Ctx::default());

    press(&mut menu, &mut now, &[Sel, Inc]);
    menu.reset();
    assert!(!menu.is_running());
    assert!(menu.context().sets(F_LEVEL).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Timeout and collaborators
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn inactivity_timeout_ends_menu() {
    let mut menu = started(Ctx::default());
    menu.set_timeout(1_000);

    assert!(menu.run(false, 500));
    menu.nav_input_mut().press(&[Inc]);
    assert!(menu.run(false, 900));
    assert!(menu.run(false, 1_500));
    assert!(!menu.run(false, 1_900));
    assert_eq!(menu.display_mut().lines.last().map(String::as_str), Some("clear"));
}

#[test]
fn timeout_also_abandons_an_edit() {
    let mut now = 0;
    let mut menu = started(Ctx::default());
    menu.set_timeout(100);

    press(&mut menu, &mut now, &[Sel, Inc]);
    assert!(menu.is_in_edit());
    assert!(!menu.run(false, now + 100));
    assert!(menu.context().sets(F_LEVEL).is_empty());
}

#[test]
fn timeout_closes_nested_menus() {
    let mut now = 0;
    let mut menu = started(Ctx::default());
    menu.set_timeout(1_000);

    press(&mut menu, &mut now, &[Inc, Inc, Sel, Sel, Sel]);
    assert_eq!(menu.depth(), 3);
    assert_eq!(menu.current_header_id(), Some(4));

    assert!(!menu.run(false, now + 1_000));
    assert!(!menu.is_running());
    assert_eq!(menu.depth(), 0);
    assert_eq!(menu.current_header_id(), None);
}

#[test]
fn zero_timeout_never_expires() {
    let mut menu = started(Ctx::default());
    assert!(menu.run(false, u64::MAX / 2));
}

#[test]
fn replacing_collaborators_returns_previous() {
    let mut menu = started(Ctx::default());
    let old = menu.set_display(RecordingDisplay::default());
    assert_eq!(old.lines.len(), 3);

    let mut nav = ScriptedNav::default();
    nav.press(&[Inc]);
    let old_nav = menu.set_nav_input(nav);
    assert!(old_nav.script.is_empty());

    assert!(menu.run(false, 20));
    assert_eq!(menu.display_mut().lines, ["1:<Count>"]);
}

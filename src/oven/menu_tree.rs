//! The controller's menu tree and the value-request functions behind it.
//!
//! ```text
//! Main ─┬─ Reflow ──── Profile, Start
//!       ├─ Bake ────── Temp, Duration, Start
//!       └─ Settings ─┬─ Outputs ── D4..D7 type and power
//!                    ├─ Servo ──── Retract, Armed, Open, Open time
//!                    ├─ Temps ──── Cool, Max, Over
//!                    └─ Buzzer, TC offset, Factory
//! ```

use super::settings::{
    Job, Oven, RelayType, ReflowProfile, BAKE_MAX_MINUTES, BAKE_MAX_TEMPERATURE,
    BAKE_MIN_TEMPERATURE, REFLOW_PROFILES, RELAY_COUNT, RELAY_TYPES,
};
use crate::menu::{
    FieldKind, FixedRange, InputField, MenuDefs, MenuHeader, MenuId, MenuItem, NumericRange,
    Value, ValueOp,
};

// Header ids
pub const H_MAIN: MenuId = 0;
pub const H_REFLOW: MenuId = 1;
pub const H_BAKE: MenuId = 2;
pub const H_SETTINGS: MenuId = 3;
pub const H_OUTPUTS: MenuId = 4;
pub const H_SERVO: MenuId = 5;
pub const H_TEMPS: MenuId = 6;

// Field ids
pub const F_PROFILE: MenuId = 10;
pub const F_REFLOW_START: MenuId = 11;
pub const F_BAKE_TEMP: MenuId = 20;
pub const F_BAKE_MINUTES: MenuId = 21;
pub const F_BAKE_START: MenuId = 22;
pub const F_BUZZER: MenuId = 30;
pub const F_TC_OFFSET: MenuId = 31;
pub const F_FACTORY_RESET: MenuId = 32;
/// Relay fields alternate type/power: D4 type = 40, D4 power = 41, ...
pub const F_RELAY_BASE: MenuId = 40;
pub const F_SERVO_RETRACT: MenuId = 50;
pub const F_SERVO_ARMED: MenuId = 51;
pub const F_SERVO_OPEN: MenuId = 52;
pub const F_SERVO_TIME: MenuId = 53;
pub const F_COOL_TEMP: MenuId = 60;
pub const F_MAX_TEMP: MenuId = 61;
pub const F_OVER_TEMP: MenuId = 62;

const fn int(min: i32, max: i32) -> NumericRange {
    NumericRange { min, max, base: 10 }
}

const TEMP: NumericRange = int(20, 320);
const DEGREES: NumericRange = int(0, 180);
const PERCENT: NumericRange = int(0, 100);

static HEADERS: [MenuHeader<Oven>; 7] = [
    MenuHeader::new(H_MAIN, "Reflow Wizard", 0, 2),
    MenuHeader::new(H_REFLOW, "Reflow", 10, 11),
    MenuHeader::new(H_BAKE, "Bake", 20, 22),
    MenuHeader::new(H_SETTINGS, "Settings", 30, 35),
    MenuHeader::new(H_OUTPUTS, "Outputs", 40, 47).with_notify(outputs_notify),
    MenuHeader::new(H_SERVO, "Door servo", 50, 53),
    MenuHeader::new(H_TEMPS, "Temperatures", 60, 62),
];

static ITEMS: [MenuItem; 29] = [
    MenuItem::menu(0, "Reflow", H_REFLOW),
    MenuItem::menu(1, "Bake", H_BAKE),
    MenuItem::menu(2, "Settings", H_SETTINGS),
    MenuItem::input(10, "Profile", F_PROFILE),
    MenuItem::input(11, "Start", F_REFLOW_START),
    MenuItem::input(20, "Temp", F_BAKE_TEMP).with_help("Bake temperature in C"),
    MenuItem::input(21, "Duration", F_BAKE_MINUTES).with_help("Bake time in minutes"),
    MenuItem::input(22, "Start", F_BAKE_START),
    MenuItem::menu(30, "Outputs", H_OUTPUTS),
    MenuItem::menu(31, "Servo", H_SERVO),
    MenuItem::menu(32, "Temps", H_TEMPS),
    MenuItem::input(33, "Buzzer", F_BUZZER),
    MenuItem::input(34, "TC offset", F_TC_OFFSET).with_help("Thermocouple correction"),
    MenuItem::input(35, "Factory", F_FACTORY_RESET).with_help("Factory reset of all settings"),
    MenuItem::input(40, "D4 type", F_RELAY_BASE),
    MenuItem::input(41, "D4 power", F_RELAY_BASE + 1),
    MenuItem::input(42, "D5 type", F_RELAY_BASE + 2),
    MenuItem::input(43, "D5 power", F_RELAY_BASE + 3),
    MenuItem::input(44, "D6 type", F_RELAY_BASE + 4),
    MenuItem::input(45, "D6 power", F_RELAY_BASE + 5),
    MenuItem::input(46, "D7 type", F_RELAY_BASE + 6),
    MenuItem::input(47, "D7 power", F_RELAY_BASE + 7),
    MenuItem::input(50, "Retract", F_SERVO_RETRACT).with_help("Door closed"),
    MenuItem::input(51, "Armed", F_SERVO_ARMED).with_help("Just before opening"),
    MenuItem::input(52, "Open", F_SERVO_OPEN).with_help("Door fully open"),
    MenuItem::input(53, "Open time", F_SERVO_TIME).with_help("Seconds to open"),
    MenuItem::input(60, "Cool", F_COOL_TEMP).with_help("Oven counts as cool below"),
    MenuItem::input(61, "Max", F_MAX_TEMP).with_help("Highest settable temp"),
    MenuItem::input(62, "Over", F_OVER_TEMP).with_help("Relays off above"),
];

static FIELDS: [InputField<Oven>; 23] = [
    InputField::new(F_PROFILE, "Alloy", FieldKind::List(REFLOW_PROFILES), 9, profile_request),
    InputField::new(F_REFLOW_START, "Reflow", FieldKind::Action, 0, reflow_start),
    InputField::new(
        F_BAKE_TEMP,
        "Temp",
        FieldKind::Int16(int(BAKE_MIN_TEMPERATURE as i32, BAKE_MAX_TEMPERATURE as i32)),
        3,
        bake_request,
    ),
    InputField::new(
        F_BAKE_MINUTES,
        "Mins",
        FieldKind::Int16(int(1, BAKE_MAX_MINUTES as i32)),
        4,
        bake_request,
    ),
    InputField::new(F_BAKE_START, "Bake", FieldKind::Action, 0, bake_start),
    InputField::new(F_BUZZER, "Buzzer", FieldKind::Bool, 1, buzzer_request),
    InputField::new(
        F_TC_OFFSET,
        "Offset",
        FieldKind::Fixed(FixedRange { min: -1000, max: 1000, decimals: 2 }),
        6,
        tc_offset_request,
    ),
    InputField::new(F_FACTORY_RESET, "Reset", FieldKind::Action, 0, factory_reset),
    InputField::new(F_RELAY_BASE, "Type", FieldKind::List(RELAY_TYPES), 8, relay_request),
    InputField::new(F_RELAY_BASE + 1, "Power", FieldKind::Int8(PERCENT), 3, relay_request),
    InputField::new(F_RELAY_BASE + 2, "Type", FieldKind::List(RELAY_TYPES), 8, relay_request),
    InputField::new(F_RELAY_BASE + 3, "Power", FieldKind::Int8(PERCENT), 3, relay_request),
    InputField::new(F_RELAY_BASE + 4, "Type", FieldKind::List(RELAY_TYPES), 8, relay_request),
    InputField::new(F_RELAY_BASE + 5, "Power", FieldKind::Int8(PERCENT), 3, relay_request),
    InputField::new(F_RELAY_BASE + 6, "Type", FieldKind::List(RELAY_TYPES), 8, relay_request),
    InputField::new(F_RELAY_BASE + 7, "Power", FieldKind::Int8(PERCENT), 3, relay_request),
    InputField::new(F_SERVO_RETRACT, "Deg", FieldKind::Int16(DEGREES), 3, servo_request),
    InputField::new(F_SERVO_ARMED, "Deg", FieldKind::Int16(DEGREES), 3, servo_request),
    InputField::new(F_SERVO_OPEN, "Deg", FieldKind::Int16(DEGREES), 3, servo_request),
    InputField::new(
        F_SERVO_TIME,
        "Secs",
        FieldKind::Fixed(FixedRange { min: 1, max: 100, decimals: 1 }),
        4,
        servo_time_request,
    ),
    InputField::new(F_COOL_TEMP, "Temp", FieldKind::Int16(TEMP), 3, temp_request),
    InputField::new(F_MAX_TEMP, "Temp", FieldKind::Int16(TEMP), 3, temp_request),
    InputField::new(F_OVER_TEMP, "Temp", FieldKind::Int16(TEMP), 3, temp_request),
];

/// The complete controller menu.
pub static MENU: MenuDefs<'static, Oven> = MenuDefs::new(&HEADERS, &ITEMS, &FIELDS);

/// GET/SET plumbing for a plain `i16` setting.
fn int16_slot(slot: &mut i16, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => Some(Value::Int16(*slot)),
        ValueOp::Set(Value::Int16(v)) => {
            *slot = v;
            None
        }
        _ => None,
    }
}

fn profile_request(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => Some(Value::List(oven.settings.reflow_profile.index())),
        ValueOp::Set(Value::List(index)) => {
            if let Some(profile) = ReflowProfile::from_index(index) {
                oven.settings.reflow_profile = profile;
            }
            None
        }
        _ => None,
    }
}

fn reflow_start(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    if let ValueOp::Set(_) = op {
        info!("oven: reflow requested");
        oven.job = Some(Job::Reflow(oven.settings.reflow_profile));
    }
    None
}

fn bake_request(oven: &mut Oven, id: MenuId, op: ValueOp) -> Option<Value> {
    let slot = match id {
        F_BAKE_TEMP => &mut oven.settings.bake_temp,
        F_BAKE_MINUTES => &mut oven.settings.bake_minutes,
        _ => return None,
    };
    int16_slot(slot, op)
}

fn bake_start(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    if let ValueOp::Set(_) = op {
        info!("oven: bake requested");
        oven.job = Some(Job::Bake {
            temp: oven.settings.bake_temp,
            minutes: oven.settings.bake_minutes,
        });
    }
    None
}

fn buzzer_request(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => Some(Value::Bool(oven.settings.buzzer)),
        ValueOp::Set(Value::Bool(on)) => {
            oven.settings.buzzer = on;
            None
        }
        _ => None,
    }
}

fn tc_offset_request(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => Some(Value::Fixed(oven.settings.tc_offset)),
        ValueOp::Set(Value::Fixed(v)) => {
            oven.settings.tc_offset = v;
            None
        }
        _ => None,
    }
}

fn factory_reset(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    if let ValueOp::Set(_) = op {
        warn!("oven: factory reset");
        let resets = oven.factory_resets;
        *oven = Oven::default();
        oven.factory_resets = resets + 1;
    }
    None
}

/// Loads the relay block on entry and saves it on exit when it changed.
fn outputs_notify(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => oven.output_loads += 1,
        ValueOp::Set(_) => {
            if oven.settings.relays != oven.saved_relays {
                debug!("oven: saving relay outputs");
                oven.saved_relays = oven.settings.relays;
                oven.output_saves += 1;
            }
        }
        ValueOp::Try(_) => {}
    }
    None
}

fn relay_request(oven: &mut Oven, id: MenuId, op: ValueOp) -> Option<Value> {
    let offset = usize::try_from(id.checked_sub(F_RELAY_BASE)?).ok()?;
    if offset >= RELAY_COUNT * 2 {
        return None;
    }
    let relay = &mut oven.settings.relays[offset / 2];
    let is_type = offset % 2 == 0;

    match op {
        ValueOp::Get if is_type => Some(Value::List(relay.kind.index())),
        ValueOp::Get => Some(Value::Int8(i8::try_from(relay.max_power).ok()?)),
        ValueOp::Set(Value::List(index)) if is_type => {
            if let Some(kind) = RelayType::from_index(index) {
                relay.kind = kind;
            }
            None
        }
        ValueOp::Set(Value::Int8(power)) if !is_type => {
            relay.max_power = u8::try_from(power).unwrap_or(0);
            None
        }
        _ => None,
    }
}

fn servo_request(oven: &mut Oven, id: MenuId, op: ValueOp) -> Option<Value> {
    let settings = &mut oven.settings;
    let slot = match id {
        F_SERVO_RETRACT => &mut settings.servo_retract_deg,
        F_SERVO_ARMED => &mut settings.servo_armed_deg,
        F_SERVO_OPEN => &mut settings.servo_open_deg,
        _ => return None,
    };

    match op {
        ValueOp::Get => Some(Value::Int16(i16::from(*slot))),
        ValueOp::Try(Value::Int16(deg)) => {
            oven.servo_position = u8::try_from(deg).unwrap_or(oven.servo_position);
            None
        }
        ValueOp::Set(Value::Int16(deg)) => {
            if let Ok(deg) = u8::try_from(deg) {
                *slot = deg;
                oven.servo_position = deg;
            }
            None
        }
        _ => None,
    }
}

fn servo_time_request(oven: &mut Oven, _: MenuId, op: ValueOp) -> Option<Value> {
    match op {
        ValueOp::Get => Some(Value::Fixed(i32::from(oven.settings.servo_open_time))),
        ValueOp::Set(Value::Fixed(tenths)) => {
            if let Ok(tenths) = u8::try_from(tenths) {
                oven.settings.servo_open_time = tenths;
            }
            None
        }
        _ => None,
    }
}

fn temp_request(oven: &mut Oven, id: MenuId, op: ValueOp) -> Option<Value> {
    let settings = &mut oven.settings;
    let slot = match id {
        F_COOL_TEMP => &mut settings.cool_temp,
        F_MAX_TEMP => &mut settings.max_temp,
        F_OVER_TEMP => &mut settings.over_temp,
        _ => return None,
    };
    int16_slot(slot, op)
}

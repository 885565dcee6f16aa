//! Machine descriptor table
//!
//! One descriptor per setting, single-valued descriptors first and group
//! parents last. The firmware build marker `fb` sits at index 0 and is never
//! persisted, leaving record 0 to the boot sequencer.

use super::defaults::*;
use super::machine::Machine;
use motion_config_core::{Descriptor, DescriptorFlags, Getter, Locator, PrintStyle, Setter, Target};

/// Coordinate systems whose offsets are persisted by `persist_offsets`
pub const OFFSET_GROUPS: [&str; 3] = ["g54", "g55", "g56"];

/// Locator for a machine field
macro_rules! at {
    ($kind:ident, $($path:tt)+) => {{
        fn locate(m: &mut Machine) -> Target<'_> {
            Target::$kind(&mut m.$($path)+)
        }
        Some(locate as Locator<Machine>)
    }};
}

const fn single(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    print: PrintStyle,
    get: Getter,
    set: Setter,
) -> Descriptor<Machine> {
    Descriptor {
        group,
        token,
        flags: DescriptorFlags::IP,
        precision: 0,
        label,
        print,
        get,
        set,
        target: None,
        default: 0.0,
    }
}

/// Length in the active units, stored in millimeters
const fn length(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    precision: u8,
    target: Option<Locator<Machine>>,
    default: f32,
) -> Descriptor<Machine> {
    Descriptor {
        precision,
        target,
        default,
        ..single(group, token, label, PrintStyle::Lin, Getter::Flu, Setter::Flu)
    }
}

/// Rotary value in degrees
const fn rotary(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    precision: u8,
    target: Option<Locator<Machine>>,
    default: f32,
) -> Descriptor<Machine> {
    Descriptor {
        precision,
        target,
        default,
        ..single(group, token, label, PrintStyle::Rot, Getter::Flt, Setter::Flt)
    }
}

const fn float(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    precision: u8,
    target: Option<Locator<Machine>>,
    default: f32,
) -> Descriptor<Machine> {
    Descriptor {
        precision,
        target,
        default,
        ..single(group, token, label, PrintStyle::Flt, Getter::Flt, Setter::Flt)
    }
}

const fn integer(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    target: Option<Locator<Machine>>,
    default: u32,
) -> Descriptor<Machine> {
    Descriptor {
        target,
        default: default as f32,
        ..single(group, token, label, PrintStyle::Int, Getter::Int, Setter::Int)
    }
}

const fn byte(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    target: Option<Locator<Machine>>,
    default: u8,
) -> Descriptor<Machine> {
    Descriptor {
        target,
        default: default as f32,
        ..single(group, token, label, PrintStyle::Int, Getter::Ui8, Setter::Ui8)
    }
}

/// Enumerated setting accepting `0..=max`
const fn choice(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    max: u8,
    target: Option<Locator<Machine>>,
    default: u8,
) -> Descriptor<Machine> {
    Descriptor {
        target,
        default: default as f32,
        ..single(group, token, label, PrintStyle::Int, Getter::Ui8, Setter::Bounded(max))
    }
}

/// Reported value that is neither settable nor persisted
const fn read_only(
    group: &'static str,
    token: &'static str,
    label: &'static str,
    precision: u8,
    target: Option<Locator<Machine>>,
) -> Descriptor<Machine> {
    Descriptor {
        flags: DescriptorFlags::empty(),
        precision,
        target,
        ..single(group, token, label, PrintStyle::Flt, Getter::Flt, Setter::Nul)
    }
}

/// Machine descriptor table
pub static DESCRIPTORS: &[Descriptor<Machine>] = &[
    // System (unprefixed)
    read_only("sys", "fb", "firmware build", 2, at!(F32, sys.firmware_build)),
    read_only("sys", "fv", "firmware version", 3, at!(F32, sys.firmware_version)),
    length("sys", "ja", "junction acceleration", 0, at!(F32, sys.junction_acceleration), JUNCTION_ACCELERATION),
    length("sys", "ct", "chordal tolerance", 4, at!(F32, sys.chordal_tolerance), CHORDAL_TOLERANCE),
    choice("sys", "st", "switch type", 1, at!(U8, sys.switch_type), SWITCH_TYPE),
    choice("sys", "jv", "json verbosity", 5, at!(U8, sys.json_verbosity), JSON_VERBOSITY),
    choice("sys", "tv", "text verbosity", 1, at!(U8, sys.text_verbosity), TEXT_VERBOSITY),
    choice("sys", "ee", "enable echo", 1, at!(U8, sys.enable_echo), ENABLE_ECHO),
    choice("sys", "gun", "gcode units", 1, at!(U8, sys.gcode_units), GCODE_UNITS),
    // X axis
    choice("x", "xam", "axis mode", AXIS_MODE_MAX, at!(U8, axes[0].mode), AXIS_MODE_STANDARD),
    length("x", "xvm", "velocity maximum", 0, at!(F32, axes[0].velocity_max), X_VELOCITY_MAX),
    length("x", "xfr", "feedrate maximum", 0, at!(F32, axes[0].feedrate_max), X_FEEDRATE_MAX),
    length("x", "xtm", "travel maximum", 0, at!(F32, axes[0].travel_max), X_TRAVEL_MAX),
    float("x", "xjm", "jerk maximum", 0, at!(F32, axes[0].jerk_max), X_JERK_MAX),
    length("x", "xjd", "junction deviation", 4, at!(F32, axes[0].junction_deviation), X_JUNCTION_DEVIATION),
    // Y axis
    choice("y", "yam", "axis mode", AXIS_MODE_MAX, at!(U8, axes[1].mode), AXIS_MODE_STANDARD),
    length("y", "yvm", "velocity maximum", 0, at!(F32, axes[1].velocity_max), Y_VELOCITY_MAX),
    length("y", "yfr", "feedrate maximum", 0, at!(F32, axes[1].feedrate_max), Y_FEEDRATE_MAX),
    length("y", "ytm", "travel maximum", 0, at!(F32, axes[1].travel_max), Y_TRAVEL_MAX),
    float("y", "yjm", "jerk maximum", 0, at!(F32, axes[1].jerk_max), Y_JERK_MAX),
    length("y", "yjd", "junction deviation", 4, at!(F32, axes[1].junction_deviation), Y_JUNCTION_DEVIATION),
    // Z axis
    choice("z", "zam", "axis mode", AXIS_MODE_MAX, at!(U8, axes[2].mode), AXIS_MODE_STANDARD),
    length("z", "zvm", "velocity maximum", 0, at!(F32, axes[2].velocity_max), Z_VELOCITY_MAX),
    length("z", "zfr", "feedrate maximum", 0, at!(F32, axes[2].feedrate_max), Z_FEEDRATE_MAX),
    length("z", "ztm", "travel maximum", 0, at!(F32, axes[2].travel_max), Z_TRAVEL_MAX),
    float("z", "zjm", "jerk maximum", 0, at!(F32, axes[2].jerk_max), Z_JERK_MAX),
    length("z", "zjd", "junction deviation", 4, at!(F32, axes[2].junction_deviation), Z_JUNCTION_DEVIATION),
    // A axis (rotary)
    choice("a", "aam", "axis mode", AXIS_MODE_MAX, at!(U8, axes[3].mode), AXIS_MODE_STANDARD),
    rotary("a", "avm", "velocity maximum", 0, at!(F32, axes[3].velocity_max), A_VELOCITY_MAX),
    rotary("a", "afr", "feedrate maximum", 0, at!(F32, axes[3].feedrate_max), A_FEEDRATE_MAX),
    rotary("a", "atm", "travel maximum", 0, at!(F32, axes[3].travel_max), A_TRAVEL_MAX),
    float("a", "ajm", "jerk maximum", 0, at!(F32, axes[3].jerk_max), A_JERK_MAX),
    float("a", "ajd", "junction deviation", 4, at!(F32, axes[3].junction_deviation), A_JUNCTION_DEVIATION),
    length("a", "ara", "radius value", 3, at!(F32, axes[3].radius), A_RADIUS),
    // Motor 1
    choice("1", "1ma", "map to axis", 3, at!(U8, motors[0].axis), 0),
    rotary("1", "1sa", "step angle", 3, at!(F32, motors[0].step_angle), MOTOR_STEP_ANGLE),
    length("1", "1tr", "travel per revolution", 4, at!(F32, motors[0].travel_per_rev), MOTOR_TRAVEL_PER_REV),
    byte("1", "1mi", "microsteps", at!(U8, motors[0].microsteps), MOTOR_MICROSTEPS),
    choice("1", "1po", "polarity", 1, at!(U8, motors[0].polarity), MOTOR_POLARITY),
    choice("1", "1pm", "power management", 2, at!(U8, motors[0].power_mode), MOTOR_POWER_MODE),
    // Motor 2
    choice("2", "2ma", "map to axis", 3, at!(U8, motors[1].axis), 1),
    rotary("2", "2sa", "step angle", 3, at!(F32, motors[1].step_angle), MOTOR_STEP_ANGLE),
    length("2", "2tr", "travel per revolution", 4, at!(F32, motors[1].travel_per_rev), MOTOR_TRAVEL_PER_REV),
    byte("2", "2mi", "microsteps", at!(U8, motors[1].microsteps), MOTOR_MICROSTEPS),
    choice("2", "2po", "polarity", 1, at!(U8, motors[1].polarity), MOTOR_POLARITY),
    choice("2", "2pm", "power management", 2, at!(U8, motors[1].power_mode), MOTOR_POWER_MODE),
    // Motor 3
    choice("3", "3ma", "map to axis", 3, at!(U8, motors[2].axis), 2),
    rotary("3", "3sa", "step angle", 3, at!(F32, motors[2].step_angle), MOTOR_STEP_ANGLE),
    length("3", "3tr", "travel per revolution", 4, at!(F32, motors[2].travel_per_rev), MOTOR_TRAVEL_PER_REV),
    byte("3", "3mi", "microsteps", at!(U8, motors[2].microsteps), MOTOR_MICROSTEPS),
    choice("3", "3po", "polarity", 1, at!(U8, motors[2].polarity), MOTOR_POLARITY),
    choice("3", "3pm", "power management", 2, at!(U8, motors[2].power_mode), MOTOR_POWER_MODE),
    // Motor 4 (drives the rotary axis)
    choice("4", "4ma", "map to axis", 3, at!(U8, motors[3].axis), 3),
    rotary("4", "4sa", "step angle", 3, at!(F32, motors[3].step_angle), MOTOR_STEP_ANGLE),
    rotary("4", "4tr", "travel per revolution", 3, at!(F32, motors[3].travel_per_rev), A_MOTOR_TRAVEL_PER_REV),
    byte("4", "4mi", "microsteps", at!(U8, motors[3].microsteps), MOTOR_MICROSTEPS),
    choice("4", "4po", "polarity", 1, at!(U8, motors[3].polarity), MOTOR_POLARITY),
    choice("4", "4pm", "power management", 2, at!(U8, motors[3].power_mode), MOTOR_POWER_MODE),
    // Coordinate offsets
    length("g54", "g54x", "x offset", 3, at!(F32, offsets[0].x), OFFSET),
    length("g54", "g54y", "y offset", 3, at!(F32, offsets[0].y), OFFSET),
    length("g54", "g54z", "z offset", 3, at!(F32, offsets[0].z), OFFSET),
    rotary("g54", "g54a", "a offset", 3, at!(F32, offsets[0].a), OFFSET),
    length("g55", "g55x", "x offset", 3, at!(F32, offsets[1].x), OFFSET),
    length("g55", "g55y", "y offset", 3, at!(F32, offsets[1].y), OFFSET),
    length("g55", "g55z", "z offset", 3, at!(F32, offsets[1].z), OFFSET),
    rotary("g55", "g55a", "a offset", 3, at!(F32, offsets[1].a), OFFSET),
    length("g56", "g56x", "x offset", 3, at!(F32, offsets[2].x), OFFSET),
    length("g56", "g56y", "y offset", 3, at!(F32, offsets[2].y), OFFSET),
    length("g56", "g56z", "z offset", 3, at!(F32, offsets[2].z), OFFSET),
    rotary("g56", "g56a", "a offset", 3, at!(F32, offsets[2].a), OFFSET),
    // Status reports (unprefixed)
    integer("sr", "si", "status interval", at!(U32, status.interval_ms), STATUS_INTERVAL_MS),
    choice("sr", "sv", "status report verbosity", 2, at!(U8, status.verbosity), STATUS_VERBOSITY),
    // Group parents
    Descriptor::group_parent("", "x", "x axis"),
    Descriptor::group_parent("", "y", "y axis"),
    Descriptor::group_parent("", "z", "z axis"),
    Descriptor::group_parent("", "a", "a axis"),
    Descriptor::group_parent("", "1", "motor 1"),
    Descriptor::group_parent("", "2", "motor 2"),
    Descriptor::group_parent("", "3", "motor 3"),
    Descriptor::group_parent("", "4", "motor 4"),
    Descriptor::group_parent("", "g54", "g54 offsets"),
    Descriptor::group_parent("", "g55", "g55 offsets"),
    Descriptor::group_parent("", "g56", "g56 offsets"),
    Descriptor::group_parent("", "sys", "system"),
    Descriptor::group_parent("", "sr", "status report"),
];

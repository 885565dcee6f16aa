//! Compiled machine defaults
//!
//! Applied by the boot sequencer when the record store is blank or was
//! written by another firmware build. Lengths are in millimeters, rotary
//! values in degrees.

// ============================================================================
// Linear axes (x, y, z)
// ============================================================================

/// Axis mode: standard
pub const AXIS_MODE_STANDARD: u8 = 1;

/// Largest axis mode (radius)
pub const AXIS_MODE_MAX: u8 = 3;

pub const X_VELOCITY_MAX: f32 = 16000.0;
pub const X_FEEDRATE_MAX: f32 = 16000.0;
pub const X_TRAVEL_MAX: f32 = 220.0;
pub const X_JERK_MAX: f32 = 20.0;
pub const X_JUNCTION_DEVIATION: f32 = 0.05;

pub const Y_VELOCITY_MAX: f32 = 16000.0;
pub const Y_FEEDRATE_MAX: f32 = 16000.0;
pub const Y_TRAVEL_MAX: f32 = 220.0;
pub const Y_JERK_MAX: f32 = 20.0;
pub const Y_JUNCTION_DEVIATION: f32 = 0.05;

pub const Z_VELOCITY_MAX: f32 = 1200.0;
pub const Z_FEEDRATE_MAX: f32 = 1200.0;
pub const Z_TRAVEL_MAX: f32 = 100.0;
pub const Z_JERK_MAX: f32 = 10.0;
pub const Z_JUNCTION_DEVIATION: f32 = 0.05;

// ============================================================================
// Rotary axis (a)
// ============================================================================

pub const A_VELOCITY_MAX: f32 = 36000.0;
pub const A_FEEDRATE_MAX: f32 = 36000.0;
pub const A_TRAVEL_MAX: f32 = -1.0;
pub const A_JERK_MAX: f32 = 20.0;
pub const A_JUNCTION_DEVIATION: f32 = 0.1;
/// Radius used to convert linear words into degrees
pub const A_RADIUS: f32 = 1.0;

// ============================================================================
// Motors 1..4
// ============================================================================

pub const MOTOR_STEP_ANGLE: f32 = 1.8;
pub const MOTOR_TRAVEL_PER_REV: f32 = 1.25;
pub const MOTOR_MICROSTEPS: u8 = 8;
pub const MOTOR_POLARITY: u8 = 0;
/// Power mode: powered while moving
pub const MOTOR_POWER_MODE: u8 = 1;

/// A-axis motor travel per revolution (degrees)
pub const A_MOTOR_TRAVEL_PER_REV: f32 = 360.0;

// ============================================================================
// Coordinate offsets (g54..g56)
// ============================================================================

pub const OFFSET: f32 = 0.0;

// ============================================================================
// System
// ============================================================================

/// Centripetal junction acceleration (mm/min^2)
pub const JUNCTION_ACCELERATION: f32 = 100_000.0;
/// Arc chordal tolerance (mm)
pub const CHORDAL_TOLERANCE: f32 = 0.01;
/// Limit switch type: normally open
pub const SWITCH_TYPE: u8 = 0;
/// JSON verbosity: messages
pub const JSON_VERBOSITY: u8 = 4;
/// Text verbosity: verbose
pub const TEXT_VERBOSITY: u8 = 1;
/// Echo received characters
pub const ENABLE_ECHO: u8 = 0;
/// Power-on G-code units (0 = G20 inches, 1 = G21 millimeters)
pub const GCODE_UNITS: u8 = 1;

// ============================================================================
// Status reports
// ============================================================================

/// Status report interval (ms)
pub const STATUS_INTERVAL_MS: u32 = 250;
/// Status report verbosity: filtered
pub const STATUS_VERBOSITY: u8 = 1;

//! Machine settings state
//!
//! The struct the descriptor table projects onto. Values are zero until the
//! boot sequencer loads them from the record store or the compiled defaults.

use motion_config_core::{MachineContext, UnitsMode};

/// Number of axes (x, y, z, a)
pub const AXES: usize = 4;

/// Number of motors
pub const MOTORS: usize = 4;

/// Number of coordinate systems with stored offsets (g54..g56)
pub const COORD_SYSTEMS: usize = 3;

/// Status report timer resolution (ms)
pub const STATUS_TICK_MS: u32 = 10;

/// Shortest status report interval accepted (ms)
pub const MIN_STATUS_INTERVAL_MS: u32 = 100;

/// Per-axis settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Axis {
    /// Axis mode
    pub mode: u8,
    /// Maximum traverse velocity
    pub velocity_max: f32,
    /// Maximum feed rate
    pub feedrate_max: f32,
    /// Maximum travel
    pub travel_max: f32,
    /// Maximum jerk (millions)
    pub jerk_max: f32,
    /// Junction deviation
    pub junction_deviation: f32,
    /// Radius for rotary axes
    pub radius: f32,
}

/// Per-motor settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motor {
    /// Axis driven by this motor (0 = x .. 3 = a)
    pub axis: u8,
    /// Step angle (degrees)
    pub step_angle: f32,
    /// Travel per revolution
    pub travel_per_rev: f32,
    /// Microsteps per full step
    pub microsteps: u8,
    /// Direction polarity
    pub polarity: u8,
    /// Power management mode
    pub power_mode: u8,
}

/// Work offsets of one coordinate system
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offsets {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub a: f32,
}

/// System-wide settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct System {
    /// Firmware build (read-only)
    pub firmware_build: f32,
    /// Firmware version (read-only)
    pub firmware_version: f32,
    /// Junction acceleration
    pub junction_acceleration: f32,
    /// Arc chordal tolerance
    pub chordal_tolerance: f32,
    /// Limit switch type
    pub switch_type: u8,
    /// JSON verbosity
    pub json_verbosity: u8,
    /// Text verbosity
    pub text_verbosity: u8,
    /// Character echo
    pub enable_echo: u8,
    /// Power-on G-code units (0 = inches, 1 = millimeters)
    pub gcode_units: u8,
}

/// Status report settings and the timer derived from them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusReport {
    /// Report interval (ms)
    pub interval_ms: u32,
    /// Report verbosity
    pub verbosity: u8,
    /// Timer ticks between reports, rebuilt after every settings load
    pub ticks: u32,
}

/// Complete machine settings
#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    pub axes: [Axis; AXES],
    pub motors: [Motor; MOTORS],
    pub offsets: [Offsets; COORD_SYSTEMS],
    pub sys: System,
    pub status: StatusReport,
    /// Active length units
    pub units: UnitsMode,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            axes: [Axis::default(); AXES],
            motors: [Motor::default(); MOTORS],
            offsets: [Offsets::default(); COORD_SYSTEMS],
            sys: System::default(),
            status: StatusReport::default(),
            units: UnitsMode::Millimeters,
        }
    }
}

impl Machine {
    /// Switch to the power-on G-code units setting
    pub fn apply_gcode_units(&mut self) {
        self.units = match self.sys.gcode_units {
            0 => UnitsMode::Inches,
            _ => UnitsMode::Millimeters,
        };
    }
}

impl MachineContext for Machine {
    fn units_mode(&self) -> UnitsMode {
        self.units
    }

    fn set_units_mode(&mut self, mode: UnitsMode) {
        self.units = mode;
    }

    fn init_status_report(&mut self) {
        let interval = self.status.interval_ms.max(MIN_STATUS_INTERVAL_MS);
        self.status.ticks = interval / STATUS_TICK_MS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_report_interval_clamped() {
        let mut machine = Machine::default();
        machine.status.interval_ms = 20;
        machine.init_status_report();
        assert_eq!(machine.status.ticks, 10);

        machine.status.interval_ms = 250;
        machine.init_status_report();
        assert_eq!(machine.status.ticks, 25);
    }

    #[test]
    fn test_gcode_units() {
        let mut machine = Machine::default();
        machine.apply_gcode_units();
        assert_eq!(machine.units_mode(), UnitsMode::Inches);

        machine.sys.gcode_units = 1;
        machine.apply_gcode_units();
        assert_eq!(machine.units_mode(), UnitsMode::Millimeters);
    }
}

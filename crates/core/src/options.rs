//! Registry runtime options
//!
//! Communication mode, message echo, persistence switch and the firmware
//! build identifier used for the boot-time version check.

/// Active communication mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommMode {
    /// Line-oriented text protocol
    Text,
    /// Structured-object (JSON) protocol
    Json,
}

/// Length units used for display and input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsMode {
    /// Inches (G20)
    Inches,
    /// Millimeters (G21), the canonical internal unit
    Millimeters,
}

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Structured-object output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Render the body only, without header or footer
    Object,
    /// Render a full response object with footer
    Response,
}

/// Text output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Name/value pairs on a single line
    InlinePairs,
    /// Comma separated values on a single line
    InlineValues,
    /// One value per line with its formatting label
    MultilineFormatted,
}

/// Registry options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryOptions {
    /// Active communication mode
    pub comm_mode: CommMode,
    /// Echo conditional messages in JSON mode
    pub echo_messages: bool,
    /// Master switch for nonvolatile writes
    pub persistence: bool,
    /// Firmware build identifier stored in record 0
    pub build_id: f32,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            comm_mode: CommMode::Text,
            echo_messages: true,
            persistence: true,
            build_id: 0.0,
        }
    }
}

//! Config status types
//!
//! Every fallible registry operation reports its outcome synchronously.
//! Success carries an [`Outcome`]; failures are [`ConfigError`] values and
//! are always local to the request that produced them.

use core::fmt;

/// Result type for registry operations
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Successful completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Operation completed; storage was mutated where relevant
    Done,
    /// A deliberately inert getter/setter ran without side effect
    NoOp,
}

/// Nonvolatile store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NvmError {
    /// Record could not be read (medium blank, corrupted or failed)
    ReadFailed,
    /// Record could not be written
    WriteFailed,
    /// Record index beyond the store's capacity
    OutOfRange,
}

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Resolved index is out of bounds for the descriptor table
    InternalRange,
    /// Range-restricted setter rejected the value; storage unchanged
    InputValueUnsupported,
    /// Shared string arena could not accommodate the write
    BufferFull,
    /// Group write attempted in text mode
    UnrecognizedCommand,
    /// Token did not resolve to any descriptor
    NoMatch,
    /// No free node left in the list
    ListFull,
    /// Nonvolatile store failure
    Nvm(NvmError),
}

impl fmt::Display for NvmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NvmError::ReadFailed => write!(f, "NVM read failed"),
            NvmError::WriteFailed => write!(f, "NVM write failed"),
            NvmError::OutOfRange => write!(f, "NVM record out of range"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InternalRange => write!(f, "internal range error"),
            ConfigError::InputValueUnsupported => write!(f, "input value unsupported"),
            ConfigError::BufferFull => write!(f, "buffer full"),
            ConfigError::UnrecognizedCommand => write!(f, "unrecognized command"),
            ConfigError::NoMatch => write!(f, "unrecognized token"),
            ConfigError::ListFull => write!(f, "response list full"),
            ConfigError::Nvm(e) => write!(f, "{}", e),
        }
    }
}

impl From<NvmError> for ConfigError {
    fn from(e: NvmError) -> Self {
        ConfigError::Nvm(e)
    }
}

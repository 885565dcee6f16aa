//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;
use motion_config_core::NvmError;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Flash operation failed
    Flash(FlashError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// Flash-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashError {
    /// Erase operation failed
    EraseFailed,
    /// Write operation failed
    WriteFailed,
    /// Read operation failed
    ReadFailed,
    /// Invalid address (out of bounds, unaligned or protected)
    InvalidAddress,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Flash(e) => write!(f, "Flash error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl From<FlashError> for PlatformError {
    fn from(error: FlashError) -> Self {
        PlatformError::Flash(error)
    }
}

impl From<PlatformError> for NvmError {
    fn from(error: PlatformError) -> Self {
        match error {
            PlatformError::Flash(FlashError::InvalidAddress) => NvmError::OutOfRange,
            PlatformError::Flash(FlashError::ReadFailed) => NvmError::ReadFailed,
            PlatformError::Flash(_) | PlatformError::InvalidConfig => NvmError::WriteFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_error_maps_to_nvm() {
        let read: NvmError = PlatformError::from(FlashError::ReadFailed).into();
        let erase: NvmError = PlatformError::from(FlashError::EraseFailed).into();
        assert_eq!(read, NvmError::ReadFailed);
        assert_eq!(erase, NvmError::WriteFailed);
    }
}

//! Flash interface trait
//!
//! Flash backs the settings record store. Implementations wrap the target's
//! Flash driver; the mock in [`crate::platform::mock`] simulates one in RAM.

use crate::platform::Result;

/// Flash interface trait
///
/// # Flash Characteristics
///
/// - Flash is organized in blocks (typically 4 KB)
/// - Erase operations set all bytes to 0xFF
/// - Write operations can only change bits from 1→0 (must erase first)
/// - Operations are blocking; callers must not let other firmware activity
///   touch the medium while a settings write is in progress
///
/// # Memory Layout
///
/// ```text
/// [Firmware]          0x000000 - 0x040000 (256 KB) - DO NOT WRITE
/// [Record Block 0]    0x040000 - 0x041000 (4 KB)
/// [Record Block 1]    0x041000 - 0x042000 (4 KB)
/// [Record Block 2]    0x042000 - 0x043000 (4 KB)
/// [Record Block 3]    0x043000 - 0x044000 (4 KB)
/// ```
pub trait FlashInterface {
    /// Read `buf.len()` bytes starting at `address`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Flash(FlashError::InvalidAddress)` if the range is out of bounds.
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()>;

    /// Write `data` starting at `address`
    ///
    /// The target region must have been erased.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Flash(FlashError::InvalidAddress)` for protected or out-of-bounds ranges.
    fn write(&mut self, address: u32, data: &[u8]) -> Result<()>;

    /// Erase `size` bytes starting at `address`
    ///
    /// Address and size must be block-aligned.
    fn erase(&mut self, address: u32, size: u32) -> Result<()>;

    /// Minimum erasable unit in bytes
    fn block_size(&self) -> u32;

    /// Total capacity in bytes
    fn capacity(&self) -> u32;
}

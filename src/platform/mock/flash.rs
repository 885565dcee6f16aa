//! Mock Flash implementation for testing
//!
//! RAM-backed Flash with erase/program semantics, erase counting and fault
//! injection for the settings record store tests.

use crate::platform::{error::FlashError, traits::FlashInterface, Result};
use std::vec::Vec;

/// Flash block size (4 KB)
const BLOCK_SIZE: u32 = 4096;

/// Simulated capacity (512 KB)
const FLASH_CAPACITY: u32 = 512 * 1024;

/// Protected firmware region (first 256 KB)
const FIRMWARE_SIZE: u32 = 0x40000;

/// Mock Flash
///
/// # Example
///
/// ```ignore
/// use motion_config::platform::mock::MockFlash;
/// use motion_config::platform::traits::FlashInterface;
///
/// let mut flash = MockFlash::new();
/// flash.erase(0x040000, 4096).unwrap();
/// flash.write(0x040000, b"CFGR").unwrap();
///
/// let mut buf = [0u8; 4];
/// flash.read(0x040000, &mut buf).unwrap();
/// assert_eq!(&buf, b"CFGR");
/// assert_eq!(flash.erase_count(0x040000), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockFlash {
    storage: Vec<u8>,
    erase_counts: Vec<u32>,
    fail_writes: bool,
}

impl MockFlash {
    /// Create a fully erased Flash
    pub fn new() -> Self {
        Self {
            storage: vec![0xFF; FLASH_CAPACITY as usize],
            erase_counts: vec![0; (FLASH_CAPACITY / BLOCK_SIZE) as usize],
            fail_writes: false,
        }
    }

    /// Raw contents (for test verification)
    pub fn contents(&self, address: u32, len: usize) -> &[u8] {
        &self.storage[address as usize..address as usize + len]
    }

    /// Overwrite bytes with a corruption pattern, bypassing program rules
    pub fn corrupt(&mut self, address: u32, len: usize) {
        for byte in &mut self.storage[address as usize..address as usize + len] {
            *byte ^= 0xA5;
        }
    }

    /// Make every following write and erase fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of erases of the block containing `address`
    pub fn erase_count(&self, address: u32) -> u32 {
        self.erase_counts[(address / BLOCK_SIZE) as usize]
    }

    fn check_writable(&self, address: u32, len: u32) -> Result<()> {
        if self.fail_writes {
            return Err(FlashError::WriteFailed.into());
        }
        if address < FIRMWARE_SIZE || address.saturating_add(len) > FLASH_CAPACITY {
            return Err(FlashError::InvalidAddress.into());
        }
        Ok(())
    }
}

impl Default for MockFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashInterface for MockFlash {
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()> {
        let end = address as usize + buf.len();
        if end > FLASH_CAPACITY as usize {
            return Err(FlashError::InvalidAddress.into());
        }
        buf.copy_from_slice(&self.storage[address as usize..end]);
        Ok(())
    }

    fn write(&mut self, address: u32, data: &[u8]) -> Result<()> {
        self.check_writable(address, data.len() as u32)?;
        // Programming only clears bits
        for (cell, byte) in self.storage[address as usize..].iter_mut().zip(data) {
            *cell &= byte;
        }
        Ok(())
    }

    fn erase(&mut self, address: u32, size: u32) -> Result<()> {
        self.check_writable(address, size)?;
        if !address.is_multiple_of(BLOCK_SIZE) || !size.is_multiple_of(BLOCK_SIZE) {
            return Err(FlashError::InvalidAddress.into());
        }
        self.storage[address as usize..(address + size) as usize].fill(0xFF);
        for block in address / BLOCK_SIZE..(address + size) / BLOCK_SIZE {
            self.erase_counts[block as usize] += 1;
        }
        Ok(())
    }

    fn block_size(&self) -> u32 {
        BLOCK_SIZE
    }

    fn capacity(&self) -> u32 {
        FLASH_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;

    #[test]
    fn test_program_only_clears_bits() {
        let mut flash = MockFlash::new();
        flash.erase(0x040000, BLOCK_SIZE).unwrap();

        flash.write(0x040000, &[0x0F]).unwrap();
        flash.write(0x040000, &[0xF3]).unwrap();
        assert_eq!(flash.contents(0x040000, 1), &[0x03]);
    }

    #[test]
    fn test_firmware_region_protected() {
        let mut flash = MockFlash::new();
        assert_eq!(
            flash.write(0x000100, &[0]),
            Err(PlatformError::Flash(FlashError::InvalidAddress))
        );
        assert!(flash.erase(0x000000, BLOCK_SIZE).is_err());
    }

    #[test]
    fn test_unaligned_erase_rejected() {
        let mut flash = MockFlash::new();
        assert!(flash.erase(0x040100, BLOCK_SIZE).is_err());
        assert!(flash.erase(0x040000, 1024).is_err());
        assert_eq!(flash.erase_count(0x040000), 0);
    }

    #[test]
    fn test_fault_injection() {
        let mut flash = MockFlash::new();
        flash.set_fail_writes(true);
        assert_eq!(
            flash.erase(0x040000, BLOCK_SIZE),
            Err(PlatformError::Flash(FlashError::WriteFailed))
        );

        flash.set_fail_writes(false);
        flash.erase(0x040000, BLOCK_SIZE).unwrap();
        flash.write(0x040000, &[0x00; 4]).unwrap();
        flash.corrupt(0x040000, 4);
        assert_eq!(flash.contents(0x040000, 4), &[0xA5; 4]);
    }
}

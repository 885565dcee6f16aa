//! Nonvolatile record store abstraction
//!
//! Records are fixed-width raw 32-bit values addressed by descriptor index.
//! Record 0 holds the firmware build marker.

use crate::error::NvmError;

/// Fixed-width nonvolatile record store
pub trait NvmStore {
    /// Read record `index`
    fn read_record(&mut self, index: usize) -> Result<u32, NvmError>;

    /// Write record `index`
    fn write_record(&mut self, index: usize, value: u32) -> Result<(), NvmError>;
}

// ============================================================================
// In-memory Implementation (always available for testing)
// ============================================================================

/// RAM-backed record store
///
/// Starts blank: every read fails until the record has been written once.
/// Counts writes so tests can observe persist traffic.
#[derive(Debug, Clone)]
pub struct MemoryNvm<const N: usize> {
    records: [Option<u32>; N],
    writes: usize,
}

impl<const N: usize> MemoryNvm<N> {
    /// Create a blank store
    pub const fn new() -> Self {
        Self {
            records: [None; N],
            writes: 0,
        }
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw record content, `None` if never written
    pub fn record(&self, index: usize) -> Option<u32> {
        self.records.get(index).copied().flatten()
    }
}

impl<const N: usize> Default for MemoryNvm<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NvmStore for MemoryNvm<N> {
    fn read_record(&mut self, index: usize) -> Result<u32, NvmError> {
        self.records
            .get(index)
            .ok_or(NvmError::OutOfRange)?
            .ok_or(NvmError::ReadFailed)
    }

    fn write_record(&mut self, index: usize, value: u32) -> Result<(), NvmError> {
        let slot = self.records.get_mut(index).ok_or(NvmError::OutOfRange)?;
        *slot = Some(value);
        self.writes += 1;
        Ok(())
    }
}

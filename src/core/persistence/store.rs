//! Flash-backed record store
//!
//! Keeps a RAM copy of every record and commits the whole set to the next of
//! four Flash blocks on each write. At load, the valid block with the newest
//! sequence number wins; if none is valid every read fails, which the boot
//! sequencer treats as a build mismatch.

use super::block::{
    sequence_newer, RecordBlockHeader, CRC_SIZE, PRESENCE_LEN, RECORD_CAPACITY, RECORD_SIZE,
};
use super::crc::checksum_parts;
use crate::platform::{FlashError, FlashInterface, Result};
use motion_config_core::{NvmError, NvmStore};

/// Flash block addresses for record storage
///
/// Four blocks (16 KB total) rotated round-robin for wear leveling.
pub const RECORD_BLOCK_ADDRESSES: [u32; 4] = [
    0x040000, // Block 0: 256 KB offset
    0x041000, // Block 1: 260 KB offset
    0x042000, // Block 2: 264 KB offset
    0x043000, // Block 3: 268 KB offset
];

/// Number of Flash blocks for record storage
const NUM_BLOCKS: usize = RECORD_BLOCK_ADDRESSES.len();

/// Largest record payload in bytes
const MAX_PAYLOAD: usize = RECORD_CAPACITY * RECORD_SIZE;

/// Decoded block contents
struct BlockImage {
    header: RecordBlockHeader,
    present: [u8; PRESENCE_LEN],
    records: [u32; RECORD_CAPACITY],
}

/// Storage statistics for wear monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Commits since creation
    pub commits: u32,
    /// Block holding the current record set
    pub active_block: Option<u8>,
    /// Erase count per block
    pub erase_counts: [u32; NUM_BLOCKS],
}

/// Nonvolatile record store on Flash
pub struct FlashRecordStore<F: FlashInterface> {
    flash: F,
    records: [u32; RECORD_CAPACITY],
    present: [u8; PRESENCE_LEN],
    record_count: usize,
    sequence: u16,
    loaded: bool,
    stats: StoreStats,
}

impl<F: FlashInterface> FlashRecordStore<F> {
    /// Wrap a Flash device; nothing is read until the first access
    pub fn new(flash: F) -> Self {
        Self {
            flash,
            records: [0; RECORD_CAPACITY],
            present: [0; PRESENCE_LEN],
            record_count: 0,
            sequence: 0,
            loaded: false,
            stats: StoreStats {
                commits: 0,
                active_block: None,
                erase_counts: [0; NUM_BLOCKS],
            },
        }
    }

    /// Scan all blocks and load the newest valid one into RAM
    ///
    /// Returns `false` when no valid block exists; the store then starts
    /// empty.
    pub fn load(&mut self) -> Result<bool> {
        let mut newest: Option<(u8, BlockImage)> = None;
        for block_id in 0..NUM_BLOCKS as u8 {
            let Some(image) = self.read_block(block_id)? else {
                continue;
            };
            let is_newer = match &newest {
                None => true,
                Some((_, best)) => sequence_newer(image.header.sequence, best.header.sequence),
            };
            if is_newer {
                newest = Some((block_id, image));
            }
        }

        self.loaded = true;
        match newest {
            Some((block_id, image)) => {
                self.records = image.records;
                self.present = image.present;
                self.record_count = image.header.record_count as usize;
                self.sequence = image.header.sequence;
                self.stats.active_block = Some(block_id);
                crate::log_debug!("config records loaded from block {}", block_id);
                Ok(true)
            }
            None => {
                self.records = [0; RECORD_CAPACITY];
                self.present = [0; PRESENCE_LEN];
                self.record_count = 0;
                self.stats.active_block = None;
                crate::log_warn!("no valid config record block found");
                Ok(false)
            }
        }
    }

    /// Read and verify one block
    ///
    /// Returns `Ok(None)` for erased, foreign or corrupted blocks.
    fn read_block(&mut self, block_id: u8) -> Result<Option<BlockImage>> {
        let address = *RECORD_BLOCK_ADDRESSES
            .get(block_id as usize)
            .ok_or(FlashError::InvalidAddress)?;

        let mut header_buf = [0u8; RecordBlockHeader::SIZE];
        self.flash.read(address, &mut header_buf)?;
        let Some(header) = RecordBlockHeader::from_bytes(&header_buf) else {
            return Ok(None);
        };

        let mut present = [0u8; PRESENCE_LEN];
        let mut offset = address + RecordBlockHeader::SIZE as u32;
        self.flash.read(offset, &mut present)?;
        offset += PRESENCE_LEN as u32;

        let mut payload = [0u8; MAX_PAYLOAD];
        let payload = &mut payload[..header.payload_len()];
        self.flash.read(offset, payload)?;
        offset += payload.len() as u32;

        let mut crc_buf = [0u8; CRC_SIZE];
        self.flash.read(offset, &mut crc_buf)?;
        if checksum_parts(&[&header_buf, &present, payload]) != u32::from_le_bytes(crc_buf) {
            crate::log_warn!("config record block {} failed CRC", block_id);
            return Ok(None);
        }

        let mut records = [0u32; RECORD_CAPACITY];
        for (record, bytes) in records.iter_mut().zip(payload.chunks_exact(RECORD_SIZE)) {
            *record = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Ok(Some(BlockImage {
            header,
            present,
            records,
        }))
    }

    /// Write the RAM record set to the next block in rotation
    pub fn commit(&mut self) -> Result<()> {
        let block_id = match self.stats.active_block {
            Some(current) => (current + 1) % NUM_BLOCKS as u8,
            None => 0,
        };
        let sequence = self.sequence.wrapping_add(1);
        let address = RECORD_BLOCK_ADDRESSES[block_id as usize];

        let header = RecordBlockHeader::new(sequence, self.record_count as u16);
        let header_bytes = header.to_bytes();
        let mut payload = [0u8; MAX_PAYLOAD];
        for (bytes, record) in payload
            .chunks_exact_mut(RECORD_SIZE)
            .zip(&self.records[..self.record_count])
        {
            bytes.copy_from_slice(&record.to_le_bytes());
        }
        let payload = &payload[..header.payload_len()];
        let crc = checksum_parts(&[&header_bytes, &self.present, payload]);

        self.flash.erase(address, self.flash.block_size())?;
        self.stats.erase_counts[block_id as usize] += 1;

        let mut offset = address;
        self.flash.write(offset, &header_bytes)?;
        offset += RecordBlockHeader::SIZE as u32;
        self.flash.write(offset, &self.present)?;
        offset += PRESENCE_LEN as u32;
        if !payload.is_empty() {
            self.flash.write(offset, payload)?;
            offset += payload.len() as u32;
        }
        self.flash.write(offset, &crc.to_le_bytes())?;

        self.sequence = sequence;
        self.stats.commits += 1;
        self.stats.active_block = Some(block_id);
        Ok(())
    }

    /// Storage statistics
    pub fn stats(&self) -> StoreStats {
        self.stats
    }

    /// Flash device (for testing)
    pub fn flash_mut(&mut self) -> &mut F {
        &mut self.flash
    }

    /// Release the Flash device
    pub fn into_inner(self) -> F {
        self.flash
    }

    fn ensure_loaded(&mut self) -> core::result::Result<(), NvmError> {
        if !self.loaded {
            self.load().map_err(|_| NvmError::ReadFailed)?;
        }
        Ok(())
    }

    fn is_present(&self, index: usize) -> bool {
        self.present[index / 8] & (1 << (index % 8)) != 0
    }

    fn set_present(&mut self, index: usize, present: bool) {
        if present {
            self.present[index / 8] |= 1 << (index % 8);
        } else {
            self.present[index / 8] &= !(1 << (index % 8));
        }
    }
}

impl<F: FlashInterface> NvmStore for FlashRecordStore<F> {
    fn read_record(&mut self, index: usize) -> core::result::Result<u32, NvmError> {
        if index >= RECORD_CAPACITY {
            return Err(NvmError::OutOfRange);
        }
        self.ensure_loaded()?;
        if !self.is_present(index) {
            return Err(NvmError::ReadFailed);
        }
        Ok(self.records[index])
    }

    fn write_record(&mut self, index: usize, value: u32) -> core::result::Result<(), NvmError> {
        if index >= RECORD_CAPACITY {
            return Err(NvmError::OutOfRange);
        }
        self.ensure_loaded()?;

        let previous = (self.records[index], self.is_present(index), self.record_count);
        self.records[index] = value;
        self.set_present(index, true);
        self.record_count = self.record_count.max(index + 1);

        if let Err(e) = self.commit() {
            crate::log_error!("config record {} commit failed", index);
            let (record, present, count) = previous;
            self.records[index] = record;
            self.set_present(index, present);
            self.record_count = count;
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockFlash;

    #[test]
    fn test_blank_flash_reads_fail() {
        let mut store = FlashRecordStore::new(MockFlash::new());
        assert_eq!(store.read_record(0), Err(NvmError::ReadFailed));
        assert_eq!(store.read_record(RECORD_CAPACITY), Err(NvmError::OutOfRange));
        assert_eq!(store.stats().active_block, None);
    }

    #[test]
    fn test_records_survive_reload() {
        let mut store = FlashRecordStore::new(MockFlash::new());
        store.write_record(0, 0x42C8_0000).unwrap();
        store.write_record(17, 1234).unwrap();

        let mut reopened = FlashRecordStore::new(store.into_inner());
        assert_eq!(reopened.read_record(0), Ok(0x42C8_0000));
        assert_eq!(reopened.read_record(17), Ok(1234));
        assert_eq!(reopened.read_record(5), Err(NvmError::ReadFailed));
    }

    #[test]
    fn test_commits_rotate_blocks() {
        let mut store = FlashRecordStore::new(MockFlash::new());
        for i in 0..5 {
            store.write_record(1, i).unwrap();
        }

        let stats = store.stats();
        assert_eq!(stats.commits, 5);
        assert_eq!(stats.active_block, Some(0));
        assert_eq!(stats.erase_counts, [2, 1, 1, 1]);
        assert_eq!(store.flash_mut().erase_count(RECORD_BLOCK_ADDRESSES[0]), 2);
    }

    #[test]
    fn test_corrupt_newest_falls_back() {
        let mut store = FlashRecordStore::new(MockFlash::new());
        store.write_record(3, 10).unwrap();
        store.write_record(3, 20).unwrap();

        let mut flash = store.into_inner();
        flash.corrupt(RECORD_BLOCK_ADDRESSES[1] + RecordBlockHeader::SIZE as u32, 1);

        let mut reopened = FlashRecordStore::new(flash);
        assert_eq!(reopened.read_record(3), Ok(10));
        assert_eq!(reopened.stats().active_block, Some(0));
    }

    #[test]
    fn test_failed_commit_rolls_back() {
        let mut store = FlashRecordStore::new(MockFlash::new());
        store.write_record(2, 7).unwrap();

        store.flash_mut().set_fail_writes(true);
        assert_eq!(store.write_record(2, 8), Err(NvmError::WriteFailed));
        assert_eq!(store.write_record(9, 1), Err(NvmError::WriteFailed));
        assert_eq!(store.read_record(2), Ok(7));
        assert_eq!(store.read_record(9), Err(NvmError::ReadFailed));
    }
}

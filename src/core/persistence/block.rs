//! Record block format
//!
//! ```text
//! [RecordBlockHeader  12 B]
//! [presence bitmap    RECORD_CAPACITY / 8 B]
//! [records            record_count * 4 B, little-endian u32]
//! [CRC32              4 B over everything above]
//! ```

/// Maximum number of records (one per single-valued descriptor)
pub const RECORD_CAPACITY: usize = 256;

/// Presence bitmap size in bytes
pub const PRESENCE_LEN: usize = RECORD_CAPACITY / 8;

/// Size of one record in bytes
pub const RECORD_SIZE: usize = 4;

/// Size of the CRC32 trailer
pub const CRC_SIZE: usize = 4;

/// Magic number for record blocks ("CFGR")
pub const RECORD_MAGIC: u32 = u32::from_le_bytes(*b"CFGR");

/// Record block format version
pub const RECORD_FORMAT_VERSION: u16 = 1;

/// Record block header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordBlockHeader {
    /// Magic number
    pub magic: u32,
    /// Format version
    pub version: u16,
    /// Sequence number (increments on each commit)
    pub sequence: u16,
    /// Number of record slots stored in this block
    pub record_count: u16,
    /// Reserved for future use
    pub reserved: u16,
}

impl RecordBlockHeader {
    /// Size of header in bytes
    pub const SIZE: usize = 12;

    /// Create a new header
    pub fn new(sequence: u16, record_count: u16) -> Self {
        Self {
            magic: RECORD_MAGIC,
            version: RECORD_FORMAT_VERSION,
            sequence,
            record_count,
            reserved: 0,
        }
    }

    /// Serialize header to bytes (little-endian)
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4..6].copy_from_slice(&self.version.to_le_bytes());
        buf[6..8].copy_from_slice(&self.sequence.to_le_bytes());
        buf[8..10].copy_from_slice(&self.record_count.to_le_bytes());
        buf[10..12].copy_from_slice(&self.reserved.to_le_bytes());
        buf
    }

    /// Deserialize and validate a header
    ///
    /// Returns `None` for erased Flash, a foreign magic, another format
    /// version or a record count beyond capacity.
    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Option<Self> {
        let header = Self {
            magic: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            version: u16::from_le_bytes([buf[4], buf[5]]),
            sequence: u16::from_le_bytes([buf[6], buf[7]]),
            record_count: u16::from_le_bytes([buf[8], buf[9]]),
            reserved: u16::from_le_bytes([buf[10], buf[11]]),
        };
        let valid = header.magic == RECORD_MAGIC
            && header.version == RECORD_FORMAT_VERSION
            && header.record_count as usize <= RECORD_CAPACITY;
        valid.then_some(header)
    }

    /// Byte length of the record payload
    pub fn payload_len(&self) -> usize {
        self.record_count as usize * RECORD_SIZE
    }
}

/// Newer-than comparison that survives sequence wrap-around
pub fn sequence_newer(a: u16, b: u16) -> bool {
    a != b && a.wrapping_sub(b) < 0x8000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes() {
        let header = RecordBlockHeader::new(7, 42);
        let bytes = header.to_bytes();
        assert_eq!(&bytes[0..4], b"CFGR");
        assert_eq!(RecordBlockHeader::from_bytes(&bytes), Some(header));
    }

    #[test]
    fn test_erased_header_rejected() {
        assert_eq!(RecordBlockHeader::from_bytes(&[0xFF; RecordBlockHeader::SIZE]), None);
    }

    #[test]
    fn test_oversized_count_rejected() {
        let bytes = RecordBlockHeader::new(1, RECORD_CAPACITY as u16 + 1).to_bytes();
        assert_eq!(RecordBlockHeader::from_bytes(&bytes), None);
    }

    #[test]
    fn test_sequence_wraps() {
        assert!(sequence_newer(2, 1));
        assert!(!sequence_newer(1, 2));
        assert!(sequence_newer(0, u16::MAX));
        assert!(!sequence_newer(5, 5));
    }
}

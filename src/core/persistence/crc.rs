//! CRC32 over record blocks
//!
//! A block is checksummed as header, then presence bitmap, then records. The
//! parts are fed to one digest so they never need a joint buffer.

use crc::{Crc, CRC_32_ISO_HDLC};

/// CRC32 algorithm (ISO HDLC / Ethernet / ZIP)
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Checksum of a sequence of byte slices, in order
pub fn checksum_parts(parts: &[&[u8]]) -> u32 {
    let mut digest = CRC32.digest();
    for part in parts {
        digest.update(part);
    }
    digest.finalize()
}

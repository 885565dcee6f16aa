//! Settings persistence on Flash
//!
//! Backs the registry's record store with wear-leveled Flash blocks, each
//! protected by a CRC32 trailer.

pub mod block;
pub mod crc;
pub mod store;

pub use block::{RecordBlockHeader, RECORD_CAPACITY};
pub use store::{FlashRecordStore, StoreStats, RECORD_BLOCK_ADDRESSES};

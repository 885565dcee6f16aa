//! Shared string arena
//!
//! One fixed-capacity, append-only buffer holding the string payloads of a
//! single request/response cycle. Strings are copied in with a terminator and
//! referenced by [`StrRef`]. The arena is reset all at once together with the
//! node list; references issued before a reset no longer resolve.

use crate::error::{ConfigError, Result};

/// Default shared string capacity in bytes
pub const SHARED_STRING_LEN: usize = 512;

/// Reference to a string held in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrRef {
    offset: usize,
    len: usize,
    epoch: u16,
}

impl StrRef {
    /// Byte offset of the string in the arena
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// String length in bytes (terminator excluded)
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the empty string
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Append-only, cycle-scoped string buffer
#[derive(Debug, Clone)]
pub struct StringArena<const N: usize> {
    buf: [u8; N],
    wp: usize,
    epoch: u16,
}

impl<const N: usize> StringArena<N> {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            wp: 0,
            epoch: 0,
        }
    }

    /// Discard every string and invalidate outstanding references
    pub fn reset(&mut self) {
        self.wp = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Copy `text` in with a terminator
    ///
    /// Fails with `BufferFull` when the text and its terminator do not fit;
    /// the arena and all earlier references are left untouched.
    pub fn copy_in(&mut self, text: &str) -> Result<StrRef> {
        let len = text.len();
        if self.wp + len + 1 > N {
            return Err(ConfigError::BufferFull);
        }
        let offset = self.wp;
        self.buf[offset..offset + len].copy_from_slice(text.as_bytes());
        self.buf[offset + len] = 0;
        self.wp += len + 1;
        Ok(StrRef {
            offset,
            len,
            epoch: self.epoch,
        })
    }

    /// Look up a reference issued in the current cycle
    pub fn get(&self, r: StrRef) -> Option<&str> {
        if r.epoch != self.epoch || r.offset + r.len > self.wp {
            return None;
        }
        core::str::from_utf8(&self.buf[r.offset..r.offset + r.len]).ok()
    }

    /// Current write offset
    pub fn write_offset(&self) -> usize {
        self.wp
    }

    /// Bytes still available (terminator included)
    pub fn remaining(&self) -> usize {
        N - self.wp
    }

    /// Total capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for StringArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

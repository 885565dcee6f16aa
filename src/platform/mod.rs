//! Platform abstraction layer
//!
//! Hardware services the settings registry depends on. Only Flash is needed:
//! the record store persists settings through [`FlashInterface`].

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{FlashError, PlatformError, Result};
pub use traits::FlashInterface;

//! Mock platform implementation for testing
//!
//! In-memory stand-ins for platform traits, usable without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod flash;

pub use flash::MockFlash;

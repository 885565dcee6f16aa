//! Core settings infrastructure
//!
//! Logging macros shared by the crate and the Flash-backed record store the
//! registry persists into.

pub mod logging;
pub mod persistence;

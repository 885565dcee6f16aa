#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! motion_config - Settings registry for an embedded motion controller
//!
//! This library binds the platform-agnostic registry in `motion_config_core`
//! to Flash persistence and to the concrete machine settings table.

// Platform abstraction layer (Flash)
pub mod platform;

// Logging macros and Flash-backed record storage
pub mod core;

// Machine state, defaults and descriptor table
pub mod settings;

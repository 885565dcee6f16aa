//! Machine settings
//!
//! The concrete settings of a four-axis, four-motor machine: state struct,
//! compiled defaults, descriptor table and boot wrapper.
//!
//! # Example
//!
//! ```ignore
//! use motion_config::core::persistence::FlashRecordStore;
//! use motion_config::settings::{boot, build_options, firmware_version, registry, Machine};
//!
//! let mut registry = registry(FlashRecordStore::new(flash), build_options()?);
//! let mut machine = Machine::default();
//! boot(&mut registry, &mut machine, firmware_version()?)?;
//! ```

pub mod boot;
pub mod defaults;
pub mod machine;
pub mod options;
pub mod table;

pub use boot::{boot, persist_offsets, registry, MachineRegistry};
pub use machine::{Axis, Machine, Motor, Offsets, StatusReport, System};
pub use options::{build_options, firmware_version};
pub use table::{DESCRIPTORS, OFFSET_GROUPS};

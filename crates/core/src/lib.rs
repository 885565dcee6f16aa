//! motion_config_core - Pure no_std settings registry for motion-control firmware
//!
//! This crate contains the token-indexed dispatch engine: descriptor table,
//! resolver, response node list and the group/boot algorithms built on them.
//! It can be tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Trait abstractions**: NVM, machine state and renderers injected via traits
//!
//! # Modules
//!
//! - [`descriptor`]: Parameter descriptors and accessor behavior enums
//! - [`table`]: Immutable descriptor table
//! - [`resolver`]: Token/group to descriptor index lookup
//! - [`node`]: Typed value nodes
//! - [`arena`]: Shared string arena
//! - [`list`]: Request/response node list
//! - [`accessor`]: Typed getters and setters
//! - [`registry`]: Dispatch gatekeeper and output entry point
//! - [`group`]: Group expansion and application
//! - [`init`]: Boot-time defaults sequencer
//! - [`printer`]: Human-readable parameter lines
//! - [`traits`]: External collaborator seams

#![no_std]

pub mod accessor;
pub mod arena;
pub mod descriptor;
pub mod error;
pub mod group;
pub mod init;
pub mod list;
pub mod node;
pub mod options;
pub mod printer;
pub mod registry;
pub mod resolver;
pub mod table;
pub mod traits;

pub use arena::{StrRef, StringArena, SHARED_STRING_LEN};
pub use descriptor::{Descriptor, DescriptorFlags, Getter, Locator, PrintStyle, Setter, Target};
pub use error::{ConfigError, NvmError, Outcome, Result};
pub use group::group_is_prefixed;
pub use init::{BootState, BUILD_RECORD};
pub use list::{NodeList, BODY_LEN, LIST_LEN, MAX_OBJECTS};
pub use node::{ConfigNode, NodeId, NodeType, ValueKind};
pub use options::{CommMode, JsonFormat, RegistryOptions, TextFormat, UnitsMode};
pub use registry::Registry;
pub use table::ConfigTable;
pub use traits::{ListRenderer, MachineContext, MemoryNvm, NvmStore};

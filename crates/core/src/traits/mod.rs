//! External collaborator seams
//!
//! The registry drives nonvolatile storage, unit-mode reporting and output
//! rendering without implementing any of them. Each is injected as a trait.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - [`MemoryNvm`] is always available for host testing
//! - The Flash-backed record store lives in the root crate

pub mod machine;
pub mod nvm;
pub mod render;

pub use machine::MachineContext;
pub use nvm::{MemoryNvm, NvmStore};
pub use render::ListRenderer;

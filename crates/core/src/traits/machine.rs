//! Machine-side collaborator used by unit-aware accessors and the boot
//! sequencer.

use crate::options::UnitsMode;

/// Settings owner seen by the registry
///
/// Implemented by the struct whose fields the descriptor table projects
/// onto.
pub trait MachineContext {
    /// Currently active display units
    fn units_mode(&self) -> UnitsMode;

    /// Change the active display units
    fn set_units_mode(&mut self, mode: UnitsMode);

    /// Rebuild derived status-report structures after a settings load
    fn init_status_report(&mut self);
}

//! Settings bring-up
//!
//! Binds the machine table to a record store and runs the boot sequencer,
//! logging which path it took.

use super::machine::Machine;
use super::table::{DESCRIPTORS, OFFSET_GROUPS};
use motion_config_core::{
    BootState, ConfigTable, NvmStore, Outcome, Registry, RegistryOptions, Result,
};

/// Registry over the machine descriptor table
pub type MachineRegistry<N> = Registry<Machine, N>;

/// Create the machine registry backed by `nvm`
pub fn registry<N: NvmStore>(nvm: N, options: RegistryOptions) -> MachineRegistry<N> {
    Registry::new(ConfigTable::new(DESCRIPTORS), nvm, options)
}

/// Load settings at power-on
///
/// Publishes the firmware identity into the read-only system settings,
/// loads or reseeds every setting, then switches to the configured power-on
/// units. The units switch happens even when some setting failed to load.
pub fn boot<N: NvmStore>(
    registry: &mut MachineRegistry<N>,
    machine: &mut Machine,
    firmware_version: f32,
) -> Result<BootState> {
    machine.sys.firmware_build = registry.options().build_id;
    machine.sys.firmware_version = firmware_version;

    let result = registry.init(machine);
    match result {
        Ok(BootState::Defaults) => crate::log_info!("initializing configs to default settings"),
        Ok(BootState::Loaded) => crate::log_info!("loading configs from NVM"),
        Err(_) => crate::log_error!("settings initialization incomplete"),
    }

    machine.apply_gcode_units();
    result
}

/// Persist the g54..g56 coordinate offsets
///
/// Acts only when `flag` is set. Returns `Done` if any record changed.
pub fn persist_offsets<N: NvmStore>(
    registry: &mut MachineRegistry<N>,
    machine: &mut Machine,
    flag: bool,
) -> Result<Outcome> {
    if !flag {
        return Ok(Outcome::NoOp);
    }
    let mut outcome = Outcome::NoOp;
    for group in OFFSET_GROUPS {
        if registry.persist_group(machine, group)? == Outcome::Done {
            outcome = Outcome::Done;
        }
    }
    Ok(outcome)
}

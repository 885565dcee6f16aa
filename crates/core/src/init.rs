//! Boot-time defaults sequencer
//!
//! Runs once per power-on. Record 0 of the nonvolatile store holds the build
//! identifier of the firmware that last wrote it; a mismatch (or an
//! unreadable store) reseeds every INITIALIZE descriptor with its compiled
//! default and persists it, otherwise the stored values are loaded.
//!
//! A setting that cannot be loaded does not stop the sequence: the remaining
//! settings are still processed, status reports are still rebuilt, and the
//! first error is returned at the end. The build marker is written only after
//! every default was applied and persisted, so an interrupted or failed
//! reseed is repeated on the next boot.

use crate::descriptor::{Descriptor, DescriptorFlags};
use crate::error::{ConfigError, Outcome, Result};
use crate::node::ConfigNode;
use crate::options::UnitsMode;
use crate::registry::Registry;
use crate::traits::{MachineContext, NvmStore};

/// Record holding the firmware build marker
pub const BUILD_RECORD: usize = 0;

/// Path taken by the boot sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    /// Store was blank or written by another build; defaults were applied
    Defaults,
    /// Settings were loaded from the store
    Loaded,
}

impl<S: MachineContext + 'static, N: NvmStore> Registry<S, N> {
    /// Load settings at boot
    pub fn init(&mut self, machine: &mut S) -> Result<BootState> {
        machine.set_units_mode(UnitsMode::Millimeters);

        let marker = self.nvm.read_record(BUILD_RECORD);
        if marker != Ok(self.options.build_id.to_bits()) {
            let mut node = ConfigNode::new();
            node.value = 1.0;
            self.set_defaults(machine, &mut node)?;
            return Ok(BootState::Defaults);
        }

        let mut first_error = None;
        for (index, descriptor) in self.table.singles() {
            if descriptor.flags.contains(DescriptorFlags::INITIALIZE) {
                if let Err(e) = self.load_record(machine, index, descriptor) {
                    first_error.get_or_insert(e);
                }
            }
        }
        machine.init_status_report();
        first_error.map_or(Ok(BootState::Loaded), Err)
    }

    /// Reset every INITIALIZE descriptor to its compiled default
    ///
    /// Acts only when `node` holds a true value; otherwise `NoOp`. Each
    /// default is set and persisted in table order and status reports are
    /// rebuilt. A failing setting is skipped and the first error returned;
    /// the build marker is written only when every setting succeeded.
    pub fn set_defaults(&mut self, machine: &mut S, node: &mut ConfigNode) -> Result<Outcome> {
        if !node.is_true() {
            return Ok(Outcome::NoOp);
        }
        machine.set_units_mode(UnitsMode::Millimeters);

        let mut first_error = None;
        for (index, descriptor) in self.table.singles() {
            if descriptor.flags.contains(DescriptorFlags::INITIALIZE) {
                let result = self
                    .load_default(machine, node, index, descriptor)
                    .and_then(|_| self.persist(machine, node));
                if let Err(e) = result {
                    first_error.get_or_insert(e);
                }
            }
        }
        if first_error.is_none() && self.options.persistence {
            if let Err(e) = self.nvm.write_record(BUILD_RECORD, self.options.build_id.to_bits()) {
                first_error = Some(e.into());
            }
        }
        machine.init_status_report();
        first_error.map_or(Ok(Outcome::Done), Err)
    }

    fn load_default(
        &self,
        machine: &mut S,
        node: &mut ConfigNode,
        index: usize,
        descriptor: &Descriptor<S>,
    ) -> Result<Outcome> {
        node.index = Some(index);
        node.set_token(descriptor.token);
        node.value = descriptor.default as f64;
        self.set_node(machine, node)
    }

    /// Load one stored record
    ///
    /// An unreadable record, or one its setter rejects, falls back to the
    /// default.
    fn load_record(&mut self, machine: &mut S, index: usize, descriptor: &Descriptor<S>) -> Result<Outcome> {
        let mut node = ConfigNode::new();
        let stored = self.nvm.read_record(index).ok();
        match (stored, descriptor.target) {
            (Some(raw), Some(locate)) => {
                node.index = Some(index);
                node.set_token(descriptor.token);
                node.value = locate(machine).decode(raw);
                match self.set_node(machine, &mut node) {
                    Err(ConfigError::InputValueUnsupported) => {
                        self.load_default(machine, &mut node, index, descriptor)
                    }
                    result => result,
                }
            }
            _ => self.load_default(machine, &mut node, index, descriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NvmError;
    use crate::options::{CommMode, RegistryOptions};
    use crate::registry::tests::{registry, Bench, BENCH};
    use crate::table::ConfigTable;
    use crate::traits::MemoryNvm;

    #[test]
    fn test_blank_store_loads_defaults() {
        let mut reg = registry(CommMode::Text);
        let mut bench = Bench::default();
        bench.set_units_mode(UnitsMode::Inches);

        assert_eq!(reg.init(&mut bench), Ok(BootState::Defaults));
        assert_eq!(bench.units_mode(), UnitsMode::Millimeters);
        assert_eq!(bench.x_vm, 1000.0);
        assert_eq!(bench.x_am, 1);
        assert_eq!(bench.sv, 1);
        assert_eq!(bench.reports, 1);

        assert_eq!(reg.nvm().record(BUILD_RECORD), Some(100.0f32.to_bits()));
        assert_eq!(reg.nvm().record(1), Some(1000.0f32.to_bits()));
        assert_eq!(reg.nvm().record(3), Some(1));
        // INITIALIZE without PERSIST
        assert_eq!(reg.nvm().record(5), None);
    }

    #[test]
    fn test_matching_marker_loads_store() {
        let mut reg = registry(CommMode::Text);
        let nvm = reg.nvm_mut();
        nvm.write_record(BUILD_RECORD, 100.0f32.to_bits()).unwrap();
        nvm.write_record(1, 1234.0f32.to_bits()).unwrap();
        nvm.write_record(2, 555.0f32.to_bits()).unwrap();
        nvm.write_record(3, 2).unwrap();
        nvm.write_record(4, 321.0f32.to_bits()).unwrap();
        let writes = reg.nvm().write_count();

        let mut bench = Bench::default();
        assert_eq!(reg.init(&mut bench), Ok(BootState::Loaded));
        assert_eq!(bench.x_vm, 1234.0);
        assert_eq!(bench.x_fr, 555.0);
        assert_eq!(bench.x_am, 2);
        assert_eq!(bench.y_vm, 321.0);
        // record 5 was never written
        assert_eq!(bench.sv, BENCH[5].default as u8);
        assert_eq!(reg.nvm().write_count(), writes);
        assert_eq!(bench.reports, 1);
    }

    #[test]
    fn test_rejected_record_falls_back_to_default() {
        let mut reg = registry(CommMode::Text);
        let nvm = reg.nvm_mut();
        nvm.write_record(BUILD_RECORD, 100.0f32.to_bits()).unwrap();
        // axis mode accepts 0..=2
        nvm.write_record(3, 9).unwrap();
        nvm.write_record(4, 321.0f32.to_bits()).unwrap();

        let mut bench = Bench::default();
        assert_eq!(reg.init(&mut bench), Ok(BootState::Loaded));
        assert_eq!(bench.x_am, BENCH[3].default as u8);
        assert_eq!(bench.y_vm, 321.0);
        assert_eq!(bench.sv, BENCH[5].default as u8);
        assert_eq!(bench.reports, 1);
    }

    #[test]
    fn test_failed_default_write_continues() {
        let options = RegistryOptions {
            build_id: 100.0,
            ..Default::default()
        };
        // Records 3 and up are out of range
        let mut reg = Registry::new(ConfigTable::new(&BENCH), MemoryNvm::<3>::new(), options);
        let mut bench = Bench::default();
        let mut node = ConfigNode::new();
        node.value = 1.0;

        assert_eq!(
            reg.set_defaults(&mut bench, &mut node),
            Err(ConfigError::Nvm(NvmError::OutOfRange))
        );
        assert_eq!(bench.y_vm, 900.0);
        assert_eq!(bench.sv, 1);
        assert_eq!(bench.reports, 1);
        assert_eq!(reg.nvm().record(2), Some(800.0f32.to_bits()));
        assert_eq!(reg.nvm().record(BUILD_RECORD), None);
    }

    #[test]
    fn test_stale_marker_reseeds() {
        let mut reg = registry(CommMode::Text);
        reg.nvm_mut().write_record(BUILD_RECORD, 99.0f32.to_bits()).unwrap();
        reg.nvm_mut().write_record(1, 1.0f32.to_bits()).unwrap();

        let mut bench = Bench::default();
        assert_eq!(reg.init(&mut bench), Ok(BootState::Defaults));
        assert_eq!(bench.x_vm, 1000.0);
        assert_eq!(reg.nvm().record(1), Some(1000.0f32.to_bits()));
        assert_eq!(reg.nvm().record(BUILD_RECORD), Some(100.0f32.to_bits()));
    }

    #[test]
    fn test_set_defaults_failsafe() {
        let mut reg = registry(CommMode::Text);
        let mut bench = Bench::default();
        let mut node = ConfigNode::new();

        assert_eq!(reg.set_defaults(&mut bench, &mut node), Ok(Outcome::NoOp));
        assert_eq!(bench.x_vm, 0.0);
        assert_eq!(reg.nvm().write_count(), 0);
    }
}

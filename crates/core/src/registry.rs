//! Settings registry and dispatch gatekeeper
//!
//! The registry binds a descriptor table to a nonvolatile record store and
//! the runtime options. Every access to a parameter goes through it: the
//! node's cached index is bounds-checked against the table, then the
//! descriptor's bound behavior runs against the machine settings struct.
//!
//! Group expansion, the boot sequencer and text printing extend this type
//! from their own modules.

use crate::descriptor::{Descriptor, DescriptorFlags, Getter, Setter};
use crate::error::{ConfigError, Outcome, Result};
use crate::list::NodeList;
use crate::node::{ConfigNode, NodeId};
use crate::options::{CommMode, JsonFormat, RegistryOptions, TextFormat};
use crate::table::ConfigTable;
use crate::traits::{ListRenderer, MachineContext, NvmStore};

/// Token used for conditional messages
pub const MESSAGE_TOKEN: &str = "msg";

/// Token-indexed settings registry
pub struct Registry<S: 'static, N> {
    pub(crate) table: ConfigTable<S>,
    pub(crate) nvm: N,
    pub(crate) options: RegistryOptions,
}

impl<S: MachineContext + 'static, N: NvmStore> Registry<S, N> {
    /// Create a registry over `table` backed by `nvm`
    pub fn new(table: ConfigTable<S>, nvm: N, options: RegistryOptions) -> Self {
        Self {
            table,
            nvm,
            options,
        }
    }

    /// Descriptor table
    pub fn table(&self) -> &ConfigTable<S> {
        &self.table
    }

    /// Runtime options
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Mutable runtime options (comm mode switches, persistence toggle)
    pub fn options_mut(&mut self) -> &mut RegistryOptions {
        &mut self.options
    }

    /// Nonvolatile record store
    pub fn nvm(&self) -> &N {
        &self.nvm
    }

    /// Mutable nonvolatile record store
    pub fn nvm_mut(&mut self) -> &mut N {
        &mut self.nvm
    }

    /// Resolve a `(group, token)` pair to a descriptor index
    pub fn resolve(&self, group: &str, token: &str) -> Option<usize> {
        self.table.resolve(group, token)
    }

    /// Bounds-checked descriptor lookup for a node index
    pub(crate) fn descriptor(&self, index: Option<usize>) -> Result<&'static Descriptor<S>> {
        index
            .and_then(|i| self.table.get(i))
            .ok_or(ConfigError::InternalRange)
    }

    // ------------------------------------------------------------------------
    // Gatekeeper
    // ------------------------------------------------------------------------

    /// Read a parameter into node `id`
    ///
    /// A group index expands the group into the nodes following `id`.
    pub fn get(&self, machine: &mut S, list: &mut NodeList, id: NodeId) -> Result<Outcome> {
        let descriptor = self.descriptor(list[id].index)?;
        match descriptor.get {
            Getter::Group => self.expand(machine, list, id),
            get => get.read(descriptor, machine, &mut list[id]),
        }
    }

    /// Write node `id`'s value into its parameter
    ///
    /// A group index applies the child nodes following `id`.
    pub fn set(&mut self, machine: &mut S, list: &mut NodeList, id: NodeId) -> Result<Outcome> {
        let descriptor = self.descriptor(list[id].index)?;
        match descriptor.set {
            Setter::Group => self.apply(machine, list, id),
            _ => self.set_node(machine, &mut list[id]),
        }
    }

    /// Read a single-valued parameter into a detached node
    pub fn get_node(&self, machine: &mut S, node: &mut ConfigNode) -> Result<Outcome> {
        let descriptor = self.descriptor(node.index)?;
        descriptor.get.read(descriptor, machine, node)
    }

    /// Write a detached node into a single-valued parameter
    pub fn set_node(&self, machine: &mut S, node: &mut ConfigNode) -> Result<Outcome> {
        let descriptor = self.descriptor(node.index)?;
        let units = machine.units_mode();
        descriptor.set.write(descriptor, machine, node, units)
    }

    /// Write the parameter addressed by `node` to nonvolatile storage
    ///
    /// No-op when persistence is off, for group indices and for descriptors
    /// without the PERSIST flag. The record is compared first and only
    /// rewritten when its content differs from the backing slot.
    pub fn persist(&mut self, machine: &mut S, node: &ConfigNode) -> Result<Outcome> {
        if !self.options.persistence {
            return Ok(Outcome::NoOp);
        }
        let descriptor = self.descriptor(node.index)?;
        match node.index {
            Some(index) if self.table.is_single(index) => self.write_through(machine, index, descriptor),
            _ => Ok(Outcome::NoOp),
        }
    }

    /// Compare-before-write of one descriptor's backing slot
    pub(crate) fn write_through(
        &mut self,
        machine: &mut S,
        index: usize,
        descriptor: &Descriptor<S>,
    ) -> Result<Outcome> {
        if !descriptor.flags.contains(DescriptorFlags::PERSIST) {
            return Ok(Outcome::NoOp);
        }
        let Some(locate) = descriptor.target else {
            return Ok(Outcome::NoOp);
        };
        let raw = locate(machine).raw();
        if self.nvm.read_record(index) == Ok(raw) {
            return Ok(Outcome::NoOp);
        }
        self.nvm.write_record(index, raw)?;
        Ok(Outcome::Done)
    }

    // ------------------------------------------------------------------------
    // Node list adds that need the table
    // ------------------------------------------------------------------------

    /// Add a parameter to the body by token and read its value
    pub fn add_object(&self, machine: &mut S, list: &mut NodeList, token: &str) -> Result<NodeId> {
        let id = list.first_empty().ok_or(ConfigError::ListFull)?;
        let index = self.resolve("", token).ok_or(ConfigError::NoMatch)?;
        list[id].index = Some(index);
        self.populate(machine, list, id)?;
        Ok(id)
    }

    /// Add a string to the body, resolving its token if it names a parameter
    pub fn add_string(&self, list: &mut NodeList, token: &str, text: &str) -> Result<NodeId> {
        let id = list.add_string(token, text)?;
        list[id].index = self.resolve("", token);
        Ok(id)
    }

    /// Add a message unless JSON echo is disabled
    ///
    /// Returns `Ok(None)` when the message is suppressed.
    pub fn add_conditional_message(&self, list: &mut NodeList, text: &str) -> Result<Option<NodeId>> {
        if self.options.comm_mode == CommMode::Json && !self.options.echo_messages {
            return Ok(None);
        }
        self.add_string(list, MESSAGE_TOKEN, text).map(Some)
    }

    /// Hand a finished list to the renderer for the active comm mode
    pub fn print_list<R: ListRenderer>(
        &self,
        renderer: &mut R,
        list: &NodeList,
        status: Result<Outcome>,
        text_format: TextFormat,
        json_format: JsonFormat,
    ) {
        match self.options.comm_mode {
            CommMode::Json => renderer.render_json(list, status, json_format),
            CommMode::Text => renderer.render_text(list, status, text_format),
        }
    }
}

//! Group expander
//!
//! Groups (axes, motors, coordinate systems, system settings) are addressed
//! through a parent descriptor whose token is the group name. Reading a
//! parent fans it out into one child node per member; writing a parent walks
//! the child nodes that follow it and gets or sets each one.
//!
//! ```text
//! {"x":""}                 expand: all x axis members
//! {"x":{"vm":1000}}        apply: set x axis velocity maximum
//! {"x":{"vm":"","fr":""}}  apply: read two members
//! ```

use crate::descriptor::DescriptorFlags;
use crate::error::{ConfigError, Outcome, Result};
use crate::list::{NodeList, MAX_OBJECTS};
use crate::node::{copy_bounded, NodeId, ValueKind};
use crate::options::CommMode;
use crate::registry::Registry;
use crate::traits::{MachineContext, NvmStore};
use heapless::String;

/// Status report group
pub const STATUS_REPORT_GROUP: &str = "sr";

/// System group
pub const SYSTEM_GROUP: &str = "sys";

/// True if the group's name prefixes its members' displayed tokens
pub fn group_is_prefixed(group: &str) -> bool {
    !matches!(group, STATUS_REPORT_GROUP | SYSTEM_GROUP)
}

impl<S: MachineContext + 'static, N: NvmStore> Registry<S, N> {
    /// Fill node `id` from its cached descriptor index and read the value
    ///
    /// The node is cleared first. Members of prefixed groups get the group
    /// name stripped from their token; members of unprefixed groups and
    /// NOSTRIP descriptors keep the full token with a blank group.
    pub fn populate(&self, machine: &mut S, list: &mut NodeList, id: NodeId) -> Result<Outcome> {
        let index = list[id].index;
        let descriptor = self.descriptor(index)?;

        list.reset_node(id);
        let node = &mut list[id];
        node.index = index;
        let keep_token = descriptor.group.is_empty()
            || descriptor.flags.contains(DescriptorFlags::NOSTRIP)
            || !group_is_prefixed(descriptor.group);
        if keep_token {
            node.set_token(descriptor.token);
        } else {
            node.set_token(descriptor.stripped_token());
            node.set_group(descriptor.group);
        }
        self.get(machine, list, id)
    }

    /// Expand the group named by node `id` into the nodes that follow it
    ///
    /// The parent becomes a parent marker; every single-valued descriptor of
    /// the group, in table order, populates the next slot.
    pub fn expand(&self, machine: &mut S, list: &mut NodeList, id: NodeId) -> Result<Outcome> {
        let mut group = String::<{ crate::descriptor::TOKEN_LEN }>::new();
        copy_bounded(&mut group, &list[id].token);
        list[id].kind = ValueKind::Parent;

        let mut cursor = id;
        for (index, descriptor) in self.table.singles() {
            if descriptor.group != group.as_str() {
                continue;
            }
            cursor = match list.next(cursor) {
                Some(next) if next != list.footer() => next,
                _ => return Err(ConfigError::ListFull),
            };
            list[cursor].index = Some(index);
            self.populate(machine, list, cursor)?;
        }
        Ok(Outcome::Done)
    }

    /// Get or set each child node following parent `id`
    ///
    /// Structured-object mode only. A `Null` child is a read request; any
    /// other populated child is written and persisted. The walk stops at the
    /// first empty node. Every child is processed; the first error is
    /// returned.
    pub fn apply(&mut self, machine: &mut S, list: &mut NodeList, id: NodeId) -> Result<Outcome> {
        if self.options.comm_mode == CommMode::Text {
            return Err(ConfigError::UnrecognizedCommand);
        }

        let mut first_error = None;
        let mut cursor = id;
        for _ in 0..MAX_OBJECTS {
            cursor = match list.next(cursor) {
                Some(next) => next,
                None => break,
            };
            let kind = list[cursor].kind;
            let result = match kind {
                ValueKind::Empty => break,
                ValueKind::Null => self.get(machine, list, cursor),
                _ => self
                    .set(machine, list, cursor)
                    .and_then(|_| self.persist(machine, &list[cursor])),
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(Outcome::Done), Err)
    }

    /// Persist every member of `group`
    ///
    /// Returns `Done` if at least one record was rewritten.
    pub fn persist_group(&mut self, machine: &mut S, group: &str) -> Result<Outcome> {
        if !self.options.persistence {
            return Ok(Outcome::NoOp);
        }
        let mut outcome = Outcome::NoOp;
        for (index, descriptor) in self.table.singles() {
            if descriptor.group != group {
                continue;
            }
            if self.write_through(machine, index, descriptor)? == Outcome::Done {
                outcome = Outcome::Done;
            }
        }
        Ok(outcome)
    }
}

//! Node list manager
//!
//! A fixed pool of [`ConfigNode`]s linked into a doubly-linked chain: one
//! header node (the root parent), the body, and a trailing footer slot. The
//! list owns the shared string arena, so resetting the list also discards
//! every string of the previous cycle.
//!
//! Only one list is meant to be in flight at a time. Passing it by `&mut`
//! through every call enforces that without any global state.

use crate::arena::{StringArena, SHARED_STRING_LEN};
use crate::error::{ConfigError, Result};
use crate::node::{ConfigNode, NodeId, ValueKind, ROOT_TOKEN};
use core::ops::{Index, IndexMut};

/// Total node slots: header + body + footer
pub const LIST_LEN: usize = 32;

/// Body slots
pub const BODY_LEN: usize = LIST_LEN - 2;

/// Maximum number of children walked by a group write
pub const MAX_OBJECTS: usize = BODY_LEN - 1;

const HEADER: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

/// Request/response node list
#[derive(Debug, Clone)]
pub struct NodeList {
    nodes: [ConfigNode; LIST_LEN],
    strings: StringArena<SHARED_STRING_LEN>,
}

impl NodeList {
    /// Create a list in its reset state
    pub fn new() -> Self {
        let mut list = Self {
            nodes: core::array::from_fn(|_| ConfigNode::new()),
            strings: StringArena::new(),
        };
        list.reset();
        list
    }

    /// Reinitialize the whole pool for a new cycle
    ///
    /// Clears the string arena, relinks every slot, empties every value and
    /// rebuilds the header as the root parent. Returns the first body node.
    pub fn reset(&mut self) -> NodeId {
        self.strings.reset();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            *node = ConfigNode::new();
            node.pv = i.checked_sub(1).map(NodeId);
            node.nx = (i + 1 < LIST_LEN).then_some(NodeId(i + 1));
            node.depth = 1;
        }
        let header = &mut self.nodes[HEADER.0];
        header.depth = 0;
        header.kind = ValueKind::Parent;
        header.set_token(ROOT_TOKEN);
        BODY
    }

    /// Clear one node, keeping its links
    ///
    /// Depth is recomputed from the predecessor: one deeper than a parent,
    /// otherwise level with it.
    pub fn reset_node(&mut self, id: NodeId) {
        let depth = match self.nodes[id.0].pv {
            None => 0,
            Some(pv) => {
                let prev = &self.nodes[pv.0];
                if prev.kind == ValueKind::Parent {
                    prev.depth + 1
                } else {
                    prev.depth
                }
            }
        };
        let node = &mut self.nodes[id.0];
        node.kind = ValueKind::Empty;
        node.index = None;
        node.value = 0.0;
        node.precision = 0;
        node.token.clear();
        node.group.clear();
        node.string = None;
        node.depth = depth;
    }

    /// Header (root parent) node
    pub fn header(&self) -> NodeId {
        HEADER
    }

    /// First body node
    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Trailing footer slot
    pub fn footer(&self) -> NodeId {
        NodeId(LIST_LEN - 1)
    }

    /// Node following `id`
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].nx
    }

    /// Node preceding `id`
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].pv
    }

    /// Walk the chain forward from the header
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: Some(HEADER),
        }
    }

    /// Walk the body forward until the first empty node
    pub fn body_iter(&self) -> impl Iterator<Item = (NodeId, &ConfigNode)> {
        self.iter()
            .skip(1)
            .take_while(|(_, node)| node.kind != ValueKind::Empty)
    }

    /// First empty slot in the body
    pub fn first_empty(&self) -> Option<NodeId> {
        let mut cursor = Some(BODY);
        for _ in 0..BODY_LEN {
            let id = cursor?;
            if self.nodes[id.0].kind == ValueKind::Empty {
                return Some(id);
            }
            cursor = self.nodes[id.0].nx;
        }
        None
    }

    /// Copy `text` into the arena and attach it to node `id`
    pub fn copy_string(&mut self, id: NodeId, text: &str) -> Result<()> {
        let r = self.strings.copy_in(text)?;
        self.nodes[id.0].string = Some(r);
        Ok(())
    }

    /// String payload of node `id`
    pub fn string(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].string.and_then(|r| self.strings.get(r))
    }

    /// Shared string arena
    pub fn strings(&self) -> &StringArena<SHARED_STRING_LEN> {
        &self.strings
    }

    /// Add an integer node to the body
    pub fn add_integer(&mut self, token: &str, value: u32) -> Result<NodeId> {
        let id = self.first_empty().ok_or(ConfigError::ListFull)?;
        let node = &mut self.nodes[id.0];
        node.set_token(token);
        node.value = value as f64;
        node.kind = ValueKind::Integer;
        Ok(id)
    }

    /// Add a raw 32-bit data node to the body
    pub fn add_data(&mut self, token: &str, bits: u32) -> Result<NodeId> {
        let id = self.first_empty().ok_or(ConfigError::ListFull)?;
        let node = &mut self.nodes[id.0];
        node.set_token(token);
        node.set_data(bits);
        Ok(id)
    }

    /// Add a float node to the body
    pub fn add_float(&mut self, token: &str, value: f32) -> Result<NodeId> {
        let id = self.first_empty().ok_or(ConfigError::ListFull)?;
        let node = &mut self.nodes[id.0];
        node.set_token(token);
        node.value = value as f64;
        node.kind = ValueKind::Float;
        Ok(id)
    }

    /// Add a string node to the body
    ///
    /// The string is copied first; on `BufferFull` the slot stays empty.
    pub fn add_string(&mut self, token: &str, text: &str) -> Result<NodeId> {
        let id = self.first_empty().ok_or(ConfigError::ListFull)?;
        let r = self.strings.copy_in(text)?;
        let node = &mut self.nodes[id.0];
        node.set_token(token);
        node.string = Some(r);
        node.kind = ValueKind::String;
        Ok(id)
    }
}

impl Default for NodeList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for NodeList {
    type Output = ConfigNode;

    fn index(&self, id: NodeId) -> &ConfigNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeList {
    fn index_mut(&mut self, id: NodeId) -> &mut ConfigNode {
        &mut self.nodes[id.0]
    }
}

/// Forward iterator over linked nodes
pub struct Iter<'a> {
    list: &'a NodeList,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a ConfigNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.list.nodes[id.0];
        self.cursor = node.nx;
        Some((id, node))
    }
}

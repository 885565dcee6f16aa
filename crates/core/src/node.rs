//! Config nodes
//!
//! A node carries one parameter's request or result: the resolved descriptor
//! index, token and group strings, a typed value and an optional string
//! payload held in the shared arena. Nodes are owned by a
//! [`NodeList`](crate::list::NodeList) and linked to their neighbours by
//! [`NodeId`].

use crate::arena::StrRef;
use crate::descriptor::{GROUP_LEN, TOKEN_LEN};
use core::fmt;
use heapless::String;

/// Token of the response header node
pub const ROOT_TOKEN: &str = "r";

/// Kind of value held by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Unused slot; also the end-of-list marker
    Empty,
    /// Null result, or a read request in a structured-object body
    Null,
    /// Group parent; children are nested one level deeper
    Parent,
    /// Boolean or integer
    Integer,
    /// Floating point with display precision
    Float,
    /// Raw 32-bit pattern
    Data,
    /// String payload in the arena
    String,
}

/// Classification of a node by its token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// No token
    Null,
    /// G-code block
    Gcode,
    /// Status or queue report
    Report,
    /// Message or error text
    Message,
    /// Line number
    LineNumber,
    /// Configuration parameter
    Config,
}

/// Position of a node within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Slot index in the list pool
    pub fn slot(&self) -> usize {
        self.0
    }
}

/// Typed value slot
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
    /// Resolved descriptor index; `None` when unresolved
    pub index: Option<usize>,
    /// Nesting depth (0 = root)
    pub depth: u8,
    /// Value kind
    pub kind: ValueKind,
    /// Display precision for float kinds
    pub precision: u8,
    /// Numeric value; holds every u32 and f32 exactly
    pub value: f64,
    /// Token as displayed
    pub token: String<TOKEN_LEN>,
    /// Group as displayed
    pub group: String<GROUP_LEN>,
    /// String payload, valid until the next list reset
    pub string: Option<StrRef>,
    pub(crate) pv: Option<NodeId>,
    pub(crate) nx: Option<NodeId>,
}

/// Copy up to `N` characters of `src` into `dst`
pub(crate) fn copy_bounded<const N: usize>(dst: &mut String<N>, src: &str) {
    dst.clear();
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

impl ConfigNode {
    /// Create an unlinked, empty node
    pub fn new() -> Self {
        Self {
            index: None,
            depth: 0,
            kind: ValueKind::Empty,
            precision: 0,
            value: 0.0,
            token: String::new(),
            group: String::new(),
            string: None,
            pv: None,
            nx: None,
        }
    }

    /// Set the token, truncated to `TOKEN_LEN`
    pub fn set_token(&mut self, token: &str) {
        copy_bounded(&mut self.token, token);
    }

    /// Set the group, truncated to `GROUP_LEN`
    pub fn set_group(&mut self, group: &str) {
        copy_bounded(&mut self.group, group);
    }

    /// Previous node in the list
    pub fn prev(&self) -> Option<NodeId> {
        self.pv
    }

    /// Next node in the list
    pub fn next(&self) -> Option<NodeId> {
        self.nx
    }

    /// True for an unused slot
    pub fn is_empty(&self) -> bool {
        self.kind == ValueKind::Empty
    }

    /// Boolean view of the value
    pub fn is_true(&self) -> bool {
        self.value != 0.0
    }

    /// Store a raw 32-bit pattern
    pub fn set_data(&mut self, bits: u32) {
        self.value = bits as f64;
        self.kind = ValueKind::Data;
    }

    /// Raw 32-bit pattern of a data node
    pub fn data(&self) -> u32 {
        self.value as u32
    }

    /// Classify the node by its token
    pub fn node_type(&self) -> NodeType {
        match self.token.as_str() {
            "" => NodeType::Null,
            "gc" => NodeType::Gcode,
            "sr" | "qr" => NodeType::Report,
            "msg" | "err" => NodeType::Message,
            "n" => NodeType::LineNumber,
            _ => NodeType::Config,
        }
    }
}

impl Default for ConfigNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index.map(|i| i as i32).unwrap_or(-1);
        write!(
            f,
            "i:{}, d:{}, k:{:?}, p:{}, v:{}, g:{}, t:{}",
            index, self.depth, self.kind, self.precision, self.value, self.group, self.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_truncated() {
        let mut node = ConfigNode::new();
        node.set_token("abcdefgh");
        assert_eq!(node.token.as_str(), "abcde");

        node.set_group("coord");
        assert_eq!(node.group.as_str(), "coo");
    }

    #[test]
    fn test_node_type() {
        let mut node = ConfigNode::new();
        assert_eq!(node.node_type(), NodeType::Null);

        for (token, expected) in [
            ("gc", NodeType::Gcode),
            ("sr", NodeType::Report),
            ("qr", NodeType::Report),
            ("msg", NodeType::Message),
            ("err", NodeType::Message),
            ("n", NodeType::LineNumber),
            ("xvm", NodeType::Config),
        ] {
            node.set_token(token);
            assert_eq!(node.node_type(), expected);
        }
    }

    #[test]
    fn test_data_holds_full_u32() {
        let mut node = ConfigNode::new();
        node.set_data(0xDEAD_BEEF);
        assert_eq!(node.kind, ValueKind::Data);
        assert_eq!(node.data(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_display_dump() {
        let mut node = ConfigNode::new();
        node.index = Some(3);
        node.set_token("vm");
        node.set_group("x");
        let mut out = String::<64>::new();
        fmt::write(&mut out, format_args!("{}", node)).unwrap();
        assert!(out.starts_with("i:3, d:0, k:Empty"));
        assert!(out.ends_with("g:x, t:vm"));
    }
}

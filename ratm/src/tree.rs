//! The decoded record tree handed back to the caller.
//!
//! Each `Node` names a field and the byte range it was decoded from. A
//! renderer can turn the tree into text, this crate never does.

use core::fmt;

use crate::Error;

/// The value carried by a decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The node only groups its children.
    None,
    /// An unsigned integer.
    Uint(u64),
    /// A single flag bit.
    Bool(bool),
    /// An enum-like value with its name, `None` if the value is unknown.
    Enum {
        /// The raw wire value.
        raw: u64,
        /// The display name.
        name: Option<&'static str>,
    },
    /// Opaque bytes.
    Bytes(Vec<u8>),
    /// Text, e.g. a formatted address or an error message.
    Text(String),
}

impl FieldValue {
    /// The integer carried by `Uint` and `Enum` values.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::Uint(v) => Some(*v),
            FieldValue::Enum { raw, .. } => Some(*raw),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::None => Ok(()),
            FieldValue::Uint(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Enum {
                name: Some(name), ..
            } => f.write_str(name),
            FieldValue::Enum { raw, name: None } => write!(f, "Unknown ({:#x})", raw),
            FieldValue::Bytes(b) => {
                for byte in b.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Uint(value as u64)
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Uint(value as u64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Uint(value as u64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(value: &[u8]) -> Self {
        FieldValue::Bytes(value.to_vec())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A decoded field with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Dotted field name, e.g. `atm.vci`.
    pub name: &'static str,
    /// Offset of the first byte, relative to the start of the frame.
    pub offset: usize,
    /// Number of bytes covered, 0 for values taken from the pseudo-header.
    pub len: usize,
    /// The decoded value.
    pub value: FieldValue,
    /// Sub-fields.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node.
    pub fn new<V: Into<FieldValue>>(name: &'static str, offset: usize, len: usize, value: V) -> Self {
        Node {
            name,
            offset,
            len,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Create a node that only groups children.
    pub fn group(name: &'static str, offset: usize, len: usize) -> Self {
        Node::new(name, offset, len, FieldValue::None)
    }

    /// Create a node describing a decode failure.
    pub fn error(err: &Error) -> Self {
        Node::new("malformed", err.offset(), 0, err.to_string())
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Move this node and all of its children forward by `base` bytes.
    pub fn shifted(mut self, base: usize) -> Self {
        self.shift(base);
        self
    }

    fn shift(&mut self, base: usize) {
        self.offset += base;
        for child in self.children.iter_mut() {
            child.shift(base);
        }
    }

    /// Direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first search for the first node with the given name, including `self`.
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Collect every node with the given name, in depth-first order.
    pub fn find_all<'a>(&'a self, name: &str, out: &mut Vec<&'a Node>) {
        if self.name == name {
            out.push(self);
        }
        for child in self.children.iter() {
            child.find_all(name, out);
        }
    }
}

//! uGUI DOM - element tree for generated pages
//!
//! Arena-allocated node tree. Nodes are addressed by [`NodeId`]; the
//! document node is always [`NodeId::ROOT`].

mod attributes;
mod content;
mod document;
mod error;
mod node;
mod tags;
mod tree;

pub use attributes::{AttrValue, Attributes, normalize_attr_name};
pub use content::Content;
pub use document::{Document, StyleMode};
pub use error::{DomError, DomResult};
pub use node::{ElementData, Node, NodeData, TextData};
pub use tags::{
    DEPRECATED_TAGS, KNOWN_TAGS, TagStatus, VOID_ELEMENTS, is_void, normalize_tag_name, tag_status,
};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

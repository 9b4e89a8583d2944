//! DOM Node
//!
//! A node owns the ordered list of its children; the parent link is a
//! plain index used to walk back up the tree.

use crate::NodeId;
use crate::attributes::Attributes;
use crate::tags::is_void;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (None for the root and for detached nodes)
    pub parent: Option<NodeId>,
    /// Children in render order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
    /// Created by head reconciliation, replaced on the next pass
    pub synthetic: bool,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
            synthetic: false,
        }
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Create a new element node. `name` must already be normalized.
    pub fn element(name: String, attrs: Attributes) -> Self {
        Self::with_data(NodeData::Element(ElementData { name, attrs }))
    }

    /// Create a new text node
    pub fn text(content: String, raw: bool) -> Self {
        Self::with_data(NodeData::Text(TextData { content, raw }))
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Whether children may be appended to this node
    #[inline]
    pub fn is_container(&self) -> bool {
        !self.is_text()
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text data if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&TextData> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Tag name if this is an element
    #[inline]
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub name: String,
    /// Normalized attributes, in insertion order
    pub attrs: Attributes,
}

impl ElementData {
    #[inline]
    pub fn is_void(&self) -> bool {
        is_void(&self.name)
    }

    /// Get a string attribute
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_str(name)
    }
}

/// Text node data
#[derive(Debug, Clone)]
pub struct TextData {
    pub content: String,
    /// Emit verbatim, never escaped
    pub raw: bool,
}

//! DOM Tree (arena-based allocation)

use crate::attributes::Attributes;
use crate::error::{DomError, DomResult};
use crate::node::{Node, NodeData};
use crate::tags::{check_tag, normalize_tag_name};
use crate::NodeId;

/// Arena-based DOM tree. Slot 0 is always the document node.
///
/// Detached nodes stay in the arena; they are simply unreachable from the root.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is never removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    /// Create a detached element. The tag name is normalized and checked;
    /// unknown or deprecated names are logged but still accepted.
    pub fn create_element(&mut self, name: &str, attrs: Attributes) -> NodeId {
        let name = normalize_tag_name(name);
        check_tag(&name);
        self.push(Node::element(name, attrs))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>, raw: bool) -> NodeId {
        self.push(Node::text(content.into(), raw))
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Child ids in order
    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Iterate over children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        self.child_ids(id)
            .iter()
            .filter_map(move |&child| self.get(child).map(|node| (child, node)))
    }

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::tag_name)
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Whether `id` is reachable from the document node
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.is_ancestor(NodeId::ROOT, id)
    }

    /// Append a child node, moving it out of its previous parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let index = self.node(parent)?.children.len();
        self.insert_child(parent, index, child)
    }

    /// Insert a child at `index` (clamped to the child count)
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        self.detach(child)?;

        let parent_node = &mut self.nodes[parent.index()];
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(child)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.node(parent)?;
        self.node(child)?;

        if !parent_node.is_container() {
            return Err(DomError::InvalidContent {
                parent,
                reason: "text nodes cannot have children".to_string(),
            });
        }
        if child == NodeId::ROOT {
            return Err(DomError::InvalidContent {
                parent,
                reason: "the document node cannot be appended".to_string(),
            });
        }
        if self.is_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    /// Remove a node from its parent. A detached node is left untouched.
    pub fn detach(&mut self, child: NodeId) -> DomResult<()> {
        let Some(parent) = self.node(child)?.parent else {
            return Ok(());
        };
        if let Some(parent_node) = self.nodes.get_mut(parent.index()) {
            parent_node.children.retain(|&c| c != child);
        }
        self.nodes[child.index()].parent = None;
        Ok(())
    }

    /// Put `node` into the arena slot `slot`, or allocate a new one.
    /// The slot's previous content is discarded.
    pub(crate) fn recycle(&mut self, slot: Option<NodeId>, node: Node) -> NodeId {
        match slot.filter(|id| *id != NodeId::ROOT && id.index() < self.nodes.len()) {
            Some(id) => {
                self.nodes[id.index()] = node;
                id
            }
            None => self.push(node),
        }
    }

    /// Replace all children of `parent`. Previous children that are not in
    /// `children` become detached.
    pub(crate) fn replace_children(&mut self, parent: NodeId, children: Vec<NodeId>) {
        let previous = std::mem::take(&mut self.nodes[parent.index()].children);
        for old in previous {
            self.nodes[old.index()].parent = None;
        }
        for &child in &children {
            self.nodes[child.index()].parent = Some(parent);
        }
        self.nodes[parent.index()].children = children;
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.collect_text(id, &mut output);
        output
    }

    fn collect_text(&self, id: NodeId, output: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        if let NodeData::Text(text) = &node.data {
            output.push_str(&text.content);
        }
        for &child in &node.children {
            self.collect_text(child, output);
        }
    }

    /// Number of nodes reachable from the root
    pub fn attached_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.child_ids(id).iter().copied());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div", Attributes::new());
        tree.append_child(tree.root(), div).unwrap();

        let ids: Vec<NodeId> = (0..5)
            .map(|i| {
                let p = tree.create_text(format!("item {i}"), false);
                tree.append_child(div, p).unwrap()
            })
            .collect();

        assert_eq!(tree.child_ids(div), ids.as_slice());
        assert!(ids.iter().all(|&id| tree.parent(id) == Some(div)));
    }

    #[test]
    fn test_append_moves_node() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div", Attributes::new());
        let b = tree.create_element("div", Attributes::new());
        let span = tree.create_element("span", Attributes::new());
        tree.append_child(a, span).unwrap();
        tree.append_child(b, span).unwrap();

        assert!(tree.child_ids(a).is_empty());
        assert_eq!(tree.child_ids(b), &[span]);
        assert_eq!(tree.parent(span), Some(b));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div", Attributes::new());
        let inner = tree.create_element("div", Attributes::new());
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
        assert!(matches!(
            tree.append_child(outer, outer),
            Err(DomError::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_invalid_content() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div", Attributes::new());
        let text = tree.create_text("hi", false);

        assert!(matches!(
            tree.append_child(div, NodeId::ROOT),
            Err(DomError::InvalidContent { .. })
        ));
        assert!(matches!(
            tree.append_child(text, div),
            Err(DomError::InvalidContent { .. })
        ));
        assert_eq!(
            tree.append_child(div, NodeId(999)),
            Err(DomError::NodeNotFound(NodeId(999)))
        );
    }

    #[test]
    fn test_insert_child_clamps() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul", Attributes::new());
        let first = tree.create_element("li", Attributes::new());
        let second = tree.create_element("li", Attributes::new());
        tree.insert_child(ul, 10, first).unwrap();
        tree.insert_child(ul, 0, second).unwrap();

        assert_eq!(tree.child_ids(ul), &[second, first]);
    }

    #[test]
    fn test_unknown_tag_still_created() {
        let mut tree = DomTree::new();
        let blink = tree.create_element("BLINK", Attributes::new());
        assert_eq!(tree.tag_name(blink), Some("blink"));
    }

    #[test]
    fn test_text_content() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p", Attributes::new());
        let hello = tree.create_text("Hello, ", false);
        let b = tree.create_element("b", Attributes::new());
        let world = tree.create_text("world", false);
        tree.append_child(p, hello).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(b, world).unwrap();

        assert_eq!(tree.text_content(p), "Hello, world");
    }
}

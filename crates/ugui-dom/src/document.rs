//! Document - tree root, style registry and head reconciliation

use serde::{Deserialize, Serialize};
use ugui_css::CssRegistry;

use crate::attributes::Attributes;
use crate::content::Content;
use crate::error::DomResult;
use crate::node::Node;
use crate::tree::DomTree;
use crate::NodeId;

/// How collected styles reach the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleMode {
    /// `true` inlines the registry into a `<style>` block, `false` drops it
    Enabled(bool),
    /// Link this URL instead of inlining the registry
    External(String),
}

impl Default for StyleMode {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl StyleMode {
    /// Whether the registry is inlined into the head
    pub fn inline(&self) -> bool {
        matches!(self, Self::Enabled(true))
    }

    /// Externally linked stylesheet, if any
    pub fn external(&self) -> Option<&str> {
        match self {
            Self::External(href) => Some(href),
            Self::Enabled(_) => None,
        }
    }
}

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    styles: CssRegistry,
    /// Doctype name
    pub doctype: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// Render without inserted whitespace
    pub minify: bool,
    pub style: StyleMode,
    /// Spaces per nesting level in pretty output
    pub indent_size: usize,
    /// Escape non-raw text and attribute values on output
    pub escape_text: bool,
    stylesheets: Vec<String>,
    charset_meta: Attributes,
    default_meta: Vec<Attributes>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            styles: CssRegistry::new(),
            doctype: "html".to_string(),
            lang: "en".to_string(),
            minify: true,
            style: StyleMode::default(),
            indent_size: 2,
            escape_text: false,
            stylesheets: Vec::new(),
            charset_meta: Attributes::new().with("charset", "utf-8"),
            default_meta: vec![
                Attributes::new()
                    .with("name", "viewport")
                    .with("content", "width=device-width, initial-scale=1"),
            ],
        }
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn with_style(mut self, style: StyleMode) -> Self {
        self.style = style;
        self
    }

    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Collected CSS
    pub fn styles(&self) -> &CssRegistry {
        &self.styles
    }

    /// Register a CSS block with the page stylesheet
    pub fn add_style(&mut self, css: &str) -> bool {
        if !self.style.inline() {
            tracing::trace!("style registered while inline styles are off");
        }
        self.styles.add(css)
    }

    /// Add a link to an external stylesheet
    pub fn link_stylesheet(&mut self, href: impl Into<String>) {
        self.stylesheets.push(href.into());
    }

    /// Linked stylesheets in registration order
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str, attrs: Attributes) -> NodeId {
        self.tree.create_element(name, attrs)
    }

    /// Append content under `parent`.
    ///
    /// Text given to a `<style>` element is registered with the page
    /// stylesheet instead of becoming a child. Content given to a void
    /// element is logged and dropped.
    pub fn append(&mut self, parent: NodeId, content: impl Into<Content>) -> DomResult<()> {
        match content.into() {
            Content::Empty => Ok(()),
            Content::List(items) => {
                for item in items {
                    self.append(parent, item)?;
                }
                Ok(())
            }
            content => {
                let tag = self.tree.tag_name(parent).map(str::to_owned);
                match (tag.as_deref(), content) {
                    (Some("style"), Content::Text(css) | Content::Raw(css)) => {
                        self.add_style(&css);
                        Ok(())
                    }
                    (Some(tag), content) if crate::tags::is_void(tag) => {
                        if !content.is_empty() {
                            tracing::warn!(tag, "<{tag}> is a void element, dropping its content");
                        }
                        Ok(())
                    }
                    (_, Content::Text(text)) => self.append_text(parent, text, false),
                    (_, Content::Raw(text)) => self.append_text(parent, text, true),
                    (_, Content::Node(child)) => self.tree.append_child(parent, child).map(|_| ()),
                    (_, Content::Empty | Content::List(_)) => Ok(()),
                }
            }
        }
    }

    fn append_text(&mut self, parent: NodeId, text: String, raw: bool) -> DomResult<()> {
        let id = self.tree.create_text(text, raw);
        self.tree.append_child(parent, id)?;
        Ok(())
    }

    /// First `<head>` child of the document node
    pub fn head(&self) -> Option<NodeId> {
        self.tree
            .children(NodeId::ROOT)
            .find(|(_, node)| node.tag_name() == Some("head"))
            .map(|(id, _)| id)
    }

    /// The `<style>` block for the head, or `None` when inline styles are
    /// off or nothing was registered.
    pub fn collect_styles(&self) -> Option<String> {
        if !self.style.inline() || self.styles.is_empty() {
            return None;
        }

        let css = self.styles.render(self.minify);
        if self.minify {
            return Some(format!("<style>{css}</style>"));
        }

        let indent = " ".repeat(self.indent_size);
        let body = css
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n");
        Some(format!("<style>\n{body}\n</style>"))
    }

    /// Rebuild the head in canonical order: charset meta, other meta tags
    /// (defaults filled in), title, collected styles, linked stylesheets,
    /// then everything else in their existing order.
    ///
    /// Nodes synthesized by a previous pass are re-derived into the same
    /// arena slots, so running this repeatedly produces the same head without
    /// growing the tree.
    pub fn reconcile_head(&mut self) -> NodeId {
        let head = match self.head() {
            Some(head) => head,
            None => {
                let head = self.tree.create_element("head", Attributes::new());
                let children: Vec<NodeId> = std::iter::once(head)
                    .chain(self.tree.child_ids(NodeId::ROOT).iter().copied())
                    .collect();
                self.tree.replace_children(NodeId::ROOT, children);
                head
            }
        };

        let mut charset = None;
        let mut metas = Vec::new();
        let mut title = None;
        let mut others = Vec::new();
        let mut spare = Vec::new();

        for (id, node) in self.tree.children(head) {
            if node.synthetic {
                spare.push(id);
                continue;
            }
            match node.as_element() {
                Some(elem) if elem.name == "meta" && elem.attrs.contains("charset") && charset.is_none() => {
                    charset = Some(id);
                }
                Some(elem) if elem.name == "meta" => metas.push(id),
                Some(elem) if elem.name == "title" && title.is_none() => title = Some(id),
                _ => others.push(id),
            }
        }

        let mut ordered = Vec::with_capacity(metas.len() + others.len() + 4);
        ordered.push(match charset {
            Some(id) => id,
            None => {
                let meta = Node::element("meta".into(), self.charset_meta.clone());
                self.synthetic(&mut spare, meta)
            }
        });

        let missing: Vec<Attributes> = self
            .default_meta
            .iter()
            .filter(|defaults| {
                !metas.iter().any(|&id| {
                    self.tree
                        .get(id)
                        .and_then(|n| n.as_element())
                        .is_some_and(|elem| elem.attrs.same_set(defaults))
                })
            })
            .cloned()
            .collect();
        ordered.extend(metas);
        for attrs in missing {
            let meta = Node::element("meta".into(), attrs);
            ordered.push(self.synthetic(&mut spare, meta));
        }

        ordered.extend(title);

        if let Some(styles) = self.collect_styles() {
            ordered.push(self.synthetic(&mut spare, Node::text(styles, true)));
        }

        let links: Vec<String> = self
            .style
            .external()
            .map(str::to_owned)
            .into_iter()
            .chain(self.stylesheets.iter().cloned())
            .collect();
        for href in links {
            let attrs = Attributes::new().with("rel", "stylesheet").with("href", href);
            let link = Node::element("link".into(), attrs);
            ordered.push(self.synthetic(&mut spare, link));
        }

        ordered.extend(others);

        tracing::debug!(children = ordered.len(), "reconciled document head");
        self.tree.replace_children(head, ordered);
        head
    }

    /// Store a synthesized head node, reusing a slot from the previous pass
    /// when one is left
    fn synthetic(&mut self, spare: &mut Vec<NodeId>, mut node: Node) -> NodeId {
        node.synthetic = true;
        let slot = (!spare.is_empty()).then(|| spare.remove(0));
        self.tree.recycle(slot, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    fn head_tags(doc: &Document) -> Vec<String> {
        let head = doc.head().unwrap();
        doc.tree()
            .children(head)
            .map(|(_, node)| match node.tag_name() {
                Some(tag) => tag.to_string(),
                None => "#text".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_head_synthesized_first() {
        let mut doc = Document::new();
        let body = doc.create_element("body", Attributes::new());
        doc.append(NodeId::ROOT, body).unwrap();

        let head = doc.reconcile_head();
        assert_eq!(doc.tree().child_ids(NodeId::ROOT), &[head, body]);
        assert_eq!(head_tags(&doc), vec!["meta", "meta"]);

        let first = doc.tree().child_ids(head)[0];
        let charset = doc.tree().get(first).unwrap().as_element().unwrap();
        assert_eq!(charset.get_attr("charset"), Some("utf-8"));
    }

    #[test]
    fn test_head_order() {
        let mut doc = Document::new();
        let head = doc.create_element("head", Attributes::new());
        doc.append(NodeId::ROOT, head).unwrap();

        let script = doc.create_element("script", attrs! { src: "app.js" });
        let title = doc.create_element("title", Attributes::new());
        doc.append(title, "Demo").unwrap();
        let author = doc.create_element("meta", attrs! { name: "author", content: "me" });
        let charset = doc.create_element("meta", attrs! { charset: "utf-8" });
        doc.append(head, vec![script, title, author, charset]).unwrap();
        doc.add_style(".a { color: red; }");
        doc.link_stylesheet("/theme.css");

        doc.reconcile_head();
        let children = doc.tree().child_ids(head).to_vec();
        assert_eq!(children[0], charset);
        assert_eq!(children[1], author);
        assert_eq!(children[3], title);
        assert_eq!(children[6], script);
        assert_eq!(
            head_tags(&doc),
            vec!["meta", "meta", "meta", "title", "#text", "link", "script"]
        );
    }

    #[test]
    fn test_existing_viewport_not_duplicated() {
        let mut doc = Document::new();
        let head = doc.create_element("head", Attributes::new());
        doc.append(NodeId::ROOT, head).unwrap();
        let viewport = doc.create_element(
            "meta",
            attrs! { content: "width=device-width, initial-scale=1", name: "viewport" },
        );
        doc.append(head, viewport).unwrap();

        doc.reconcile_head();
        assert_eq!(head_tags(&doc), vec!["meta", "meta"]);
    }

    #[test]
    fn test_reconcile_idempotent() {
        let mut doc = Document::new();
        doc.add_style("body { margin: 0; }");
        doc.link_stylesheet("/a.css");

        let head = doc.reconcile_head();
        let first = head_tags(&doc);
        assert_eq!(doc.reconcile_head(), head);
        assert_eq!(head_tags(&doc), first);
        assert_eq!(first, vec!["meta", "meta", "#text", "link"]);
    }

    #[test]
    fn test_reconcile_reuses_synthetic_slots() {
        let mut doc = Document::new();
        doc.add_style("body { margin: 0; }");
        doc.link_stylesheet("/a.css");

        let head = doc.reconcile_head();
        let len = doc.tree().len();
        let synthesized = doc.tree().child_ids(head).to_vec();
        for _ in 0..4 {
            doc.reconcile_head();
        }
        assert_eq!(doc.tree().len(), len);
        assert_eq!(doc.tree().child_ids(head), synthesized.as_slice());

        doc.link_stylesheet("/b.css");
        doc.reconcile_head();
        assert_eq!(doc.tree().len(), len + 1);
        assert_eq!(head_tags(&doc), vec!["meta", "meta", "#text", "link", "link"]);
    }

    #[test]
    fn test_style_text_diverted_to_registry() {
        let mut doc = Document::new();
        let body = doc.create_element("body", Attributes::new());
        doc.append(NodeId::ROOT, body).unwrap();
        let style = doc.create_element("style", Attributes::new());
        doc.append(body, style).unwrap();
        doc.append(style, ".x { color: red; }").unwrap();
        doc.append(style, Content::raw(".x { color: red; }")).unwrap();

        assert!(doc.tree().child_ids(style).is_empty());
        assert_eq!(doc.styles().len(), 1);
    }

    #[test]
    fn test_void_content_dropped() {
        let mut doc = Document::new();
        let img = doc.create_element("img", attrs! { src: "a.png" });
        doc.append(img, "caption").unwrap();
        assert!(doc.tree().child_ids(img).is_empty());
    }

    #[test]
    fn test_collect_styles_respects_mode() {
        let mut doc = Document::new();
        assert_eq!(doc.collect_styles(), None);

        doc.add_style(".a { color: red; }");
        assert_eq!(
            doc.collect_styles().as_deref(),
            Some("<style>.a { color: red; }</style>")
        );

        doc.minify = false;
        assert_eq!(
            doc.collect_styles().as_deref(),
            Some("<style>\n  .a { color: red; }\n</style>")
        );

        doc.style = StyleMode::Enabled(false);
        assert_eq!(doc.collect_styles(), None);
    }

    #[test]
    fn test_external_style_mode_links() {
        let mut doc = Document::new().with_style(StyleMode::External("/site.css".into()));
        doc.add_style(".a { color: red; }");
        doc.reconcile_head();
        assert_eq!(head_tags(&doc), vec!["meta", "meta", "link"]);
    }

    #[test]
    fn test_style_mode_deserialize() {
        let on: StyleMode = serde_json::from_str("true").unwrap();
        let url: StyleMode = serde_json::from_str("\"/x.css\"").unwrap();
        assert_eq!(on, StyleMode::Enabled(true));
        assert_eq!(url, StyleMode::External("/x.css".into()));
    }
}

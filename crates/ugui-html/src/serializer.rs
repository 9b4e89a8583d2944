//! HTML Serialization
//!
//! Key features:
//! - Minified output with no inserted whitespace
//! - Pretty output, one tag per line, nested at `indent_size` spaces
//! - Void element handling
//! - Optional escaping of text and attribute values

use ugui_dom::{AttrValue, Attributes, Document, DomTree, NodeData, NodeId, TextData};

use crate::escape::{escape_attribute, escape_text};

/// HTML serializer
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    /// Emit no whitespace between tags
    pub minify: bool,
    /// Spaces per nesting level in pretty output
    pub indent_size: usize,
    /// Escape non-raw text and attribute values
    pub escape_text: bool,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            minify: true,
            indent_size: 2,
            escape_text: false,
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(indent_size: usize) -> Self {
        Self {
            minify: false,
            indent_size,
            escape_text: false,
        }
    }

    /// Serializer matching a document's output settings
    pub fn for_document(doc: &Document) -> Self {
        Self {
            minify: doc.minify,
            indent_size: doc.indent_size,
            escape_text: doc.escape_text,
        }
    }

    pub fn with_escaping(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// Serialize a node and its descendants
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output, 0);
        output
    }

    /// Serialize the children of a node
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_children(tree, node_id, &mut output, 0);
        output
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String, indent: usize) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => self.serialize_children(tree, node_id, output, indent),
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();
                let spaces = if self.minify { String::new() } else { " ".repeat(indent) };

                output.push_str(&spaces);
                output.push('<');
                output.push_str(tag);
                self.serialize_attrs(&elem.attrs, output);

                if elem.is_void() {
                    output.push_str("/>");
                    if !self.minify {
                        output.push('\n');
                    }
                    return;
                }

                output.push('>');
                if self.minify {
                    self.serialize_children(tree, node_id, output, 0);
                } else {
                    let mut content = String::new();
                    self.serialize_children(tree, node_id, &mut content, indent + self.indent_size);
                    if !content.trim().is_empty() {
                        output.push('\n');
                        output.push_str(content.trim_end());
                        output.push('\n');
                        output.push_str(&spaces);
                    }
                }
                output.push_str("</");
                output.push_str(tag);
                output.push('>');
                if !self.minify {
                    output.push('\n');
                }
            }
            NodeData::Text(text) => self.serialize_text(text, output, indent),
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String, indent: usize) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output, indent);
        }
    }

    fn serialize_text(&self, text: &TextData, output: &mut String, indent: usize) {
        let content = text.content.trim();
        if content.is_empty() {
            return;
        }
        let escape = self.escape_text && !text.raw;

        if self.minify {
            self.push_text(content, escape, output);
            return;
        }

        // Blank lines inside the text stay, unindented
        for line in content.lines() {
            let line = line.trim_end();
            if !line.is_empty() {
                output.extend(std::iter::repeat_n(' ', indent));
                self.push_text(line, escape, output);
            }
            output.push('\n');
        }
    }

    fn push_text(&self, text: &str, escape: bool, output: &mut String) {
        if escape {
            escape_text(text, output);
        } else {
            output.push_str(text);
        }
    }

    fn serialize_attrs(&self, attrs: &Attributes, output: &mut String) {
        for (name, value) in attrs.iter() {
            match value {
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    output.push(' ');
                    output.push_str(name);
                }
                value => {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    let value = value.to_string();
                    if self.escape_text {
                        escape_attribute(&value, output);
                    } else {
                        output.push_str(&value);
                    }
                    output.push('"');
                }
            }
        }
    }
}

/// Render a complete HTML document.
///
/// Reconciles the head first, so the output always carries the charset and
/// default meta tags and the collected styles.
pub fn render_document(doc: &mut Document) -> String {
    doc.reconcile_head();
    let serializer = HtmlSerializer::for_document(doc);
    let mut output = String::new();

    output.push_str("<!DOCTYPE ");
    output.push_str(&doc.doctype);
    output.push('>');
    if !serializer.minify {
        output.push('\n');
    }
    output.push_str("<html lang=\"");
    escape_attribute(&doc.lang, &mut output);
    output.push_str("\">");

    if serializer.minify {
        serializer.serialize_children(doc.tree(), NodeId::ROOT, &mut output, 0);
        output.push_str("</html>");
    } else {
        output.push('\n');
        serializer.serialize_children(doc.tree(), NodeId::ROOT, &mut output, doc.indent_size);
        output.push_str("</html>\n");
    }

    tracing::debug!(
        nodes = doc.tree().attached_len(),
        bytes = output.len(),
        minify = serializer.minify,
        "rendered document"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ugui_dom::attrs;

    #[test]
    fn test_void_element_minified() {
        let mut tree = DomTree::new();
        let img = tree.create_element("img", attrs! { src: "a.png", alt: "x" });
        assert_eq!(
            HtmlSerializer::new().serialize_outer(&tree, img),
            r#"<img src="a.png" alt="x"/>"#
        );
        assert_eq!(
            HtmlSerializer::pretty(2).serialize_outer(&tree, img),
            "<img src=\"a.png\" alt=\"x\"/>\n"
        );
    }

    #[test]
    fn test_empty_element_pretty() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div", attrs! { cls: "spacer" });
        let blank = tree.create_text("   ", false);
        tree.append_child(div, blank).unwrap();
        assert_eq!(
            HtmlSerializer::pretty(2).serialize_outer(&tree, div),
            "<div class=\"spacer\"></div>\n"
        );
    }

    #[test]
    fn test_numeric_attribute() {
        let mut tree = DomTree::new();
        let td = tree.create_element("td", attrs! { colspan: 2, width: 0.5 });
        assert_eq!(
            HtmlSerializer::new().serialize_outer(&tree, td),
            r#"<td colspan="2" width="0.5"></td>"#
        );
    }

    #[test]
    fn test_multiline_text_indented_per_line() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div", Attributes::new());
        let text = tree.create_text("first\n  second", false);
        tree.append_child(div, text).unwrap();
        assert_eq!(
            HtmlSerializer::pretty(2).serialize_outer(&tree, div),
            "<div>\n  first\n    second\n</div>\n"
        );
    }

    #[test]
    fn test_blank_lines_kept_in_pretty_text() {
        let mut tree = DomTree::new();
        let pre = tree.create_element("pre", Attributes::new());
        let text = tree.create_text("a\n\nb", false);
        tree.append_child(pre, text).unwrap();
        assert_eq!(
            HtmlSerializer::pretty(2).serialize_outer(&tree, pre),
            "<pre>\n  a\n\n  b\n</pre>\n"
        );

        let padded = tree.create_text("  \n\n  ", false);
        let spacer = tree.create_element("div", Attributes::new());
        tree.append_child(spacer, padded).unwrap();
        assert_eq!(
            HtmlSerializer::pretty(2).serialize_outer(&tree, spacer),
            "<div></div>\n"
        );
    }

    #[test]
    fn test_minified_text_trimmed() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p", Attributes::new());
        let text = tree.create_text("  hi  ", false);
        tree.append_child(p, text).unwrap();
        assert_eq!(HtmlSerializer::new().serialize_inner(&tree, p), "hi");
    }

    #[test]
    fn test_escaping_skips_raw() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div", attrs! { title: "a \"b\"" });
        let text = tree.create_text("1 < 2", false);
        let raw = tree.create_text("<br/>", true);
        tree.append_child(div, text).unwrap();
        tree.append_child(div, raw).unwrap();

        let escaped = HtmlSerializer::new().with_escaping(true);
        assert_eq!(
            escaped.serialize_outer(&tree, div),
            r#"<div title="a &quot;b&quot;">1 &lt; 2<br/></div>"#
        );
        assert_eq!(
            HtmlSerializer::new().serialize_outer(&tree, div),
            r#"<div title="a "b"">1 < 2<br/></div>"#
        );
    }
}

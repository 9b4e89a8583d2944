//! Component contract
//!
//! A component builds a detached subtree inside the page document and
//! reports where nested content should go. Styles are registered through the
//! [`BuildContext`] so each component kind contributes its CSS once per page.

use std::borrow::Cow;
use std::collections::HashSet;

use ugui_dom::{Attributes, Content, Document, NodeId};

use crate::error::ComponentResult;
use crate::icons::IconSource;

/// A reusable UI building block
pub trait Component {
    /// Identifies the CSS this component contributes
    fn style_key(&self) -> &str;

    /// CSS registered the first time this key is used on a page
    fn style_text(&self) -> Cow<'_, str>;

    /// Build the subtree. The returned root is detached; the caller attaches it.
    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built>;
}

/// Result of building a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Built {
    /// Outermost element
    pub root: NodeId,
    /// Where nested content goes while the component is open
    pub slot: NodeId,
}

impl Built {
    /// A component whose nested content goes directly under its root
    pub fn leaf(root: NodeId) -> Self {
        Self { root, slot: root }
    }
}

/// Mutable state available while building components
pub struct BuildContext<'a> {
    document: &'a mut Document,
    icons: &'a dyn IconSource,
    initialized: &'a mut HashSet<String>,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        document: &'a mut Document,
        icons: &'a dyn IconSource,
        initialized: &'a mut HashSet<String>,
    ) -> Self {
        Self {
            document,
            icons,
            initialized,
        }
    }

    pub fn document(&mut self) -> &mut Document {
        &mut *self.document
    }

    pub fn icons(&self) -> &dyn IconSource {
        self.icons
    }

    /// Register a component's CSS unless its key was already used on this page
    pub fn register_style(&mut self, component: &dyn Component) {
        let key = component.style_key();
        if self.initialized.contains(key) {
            return;
        }
        self.initialized.insert(key.to_string());

        let css = component.style_text();
        if !css.trim().is_empty() {
            tracing::trace!(component = key, "registering component style");
            self.document.add_style(&css);
        }
    }

    /// Register the component's style, then build it
    pub fn use_component(&mut self, component: &dyn Component) -> ComponentResult<Built> {
        self.register_style(component);
        component.build(self)
    }

    /// Create a detached element
    pub fn element(&mut self, name: &str, attrs: Attributes) -> NodeId {
        self.document.create_element(name, attrs)
    }

    pub fn append(&mut self, parent: NodeId, content: impl Into<Content>) -> ComponentResult<()> {
        self.document.append(parent, content)?;
        Ok(())
    }

    /// Create an element holding `content` and append it to `parent`
    pub fn child(
        &mut self,
        parent: NodeId,
        name: &str,
        attrs: Attributes,
        content: impl Into<Content>,
    ) -> ComponentResult<NodeId> {
        let id = self.element(name, attrs);
        self.append(id, content)?;
        self.append(parent, id)?;
        Ok(id)
    }
}

/// Move a `title` attribute to `data-tooltip` and `aria-label`
pub fn apply_tooltip(attrs: &mut Attributes) {
    if let Some(title) = attrs.remove("title") {
        attrs.insert("data-tooltip", title.clone());
        attrs.insert("aria-label", title);
    }
}

/// A component rendered with a different stylesheet.
///
/// Lets a pack reuse another pack's markup under its own CSS.
pub struct Restyled<C> {
    inner: C,
    key: &'static str,
    css: &'static str,
}

impl<C: Component> Restyled<C> {
    pub fn new(inner: C, key: &'static str, css: &'static str) -> Self {
        Self { inner, key, css }
    }
}

impl<C: Component> Component for Restyled<C> {
    fn style_key(&self) -> &str {
        self.key
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.css)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        self.inner.build(ctx)
    }
}

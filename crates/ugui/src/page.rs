//! Page builder
//!
//! A [`Page`] owns one document and a current insertion point. Every element,
//! text run and component built through the page is attached under the
//! insertion point; [`Page::open`] and friends move it into a container for
//! the lifetime of the returned [`Scope`].

use std::collections::HashSet;
use std::sync::Arc;

use ugui_components::{
    BuildContext, Built, Component, ComponentResult, IconDir, IconSource, NoIcons, PackRegistry, Props,
};
use ugui_dom::{Attributes, Content, Document, DomError, NodeId};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::scope::Scope;

/// A single page under construction
pub struct Page {
    document: Document,
    current: NodeId,
    packs: Arc<PackRegistry>,
    pack: Option<String>,
    icons: Arc<dyn IconSource>,
    initialized: HashSet<String>,
}

impl Page {
    /// Create a page using the built-in component packs
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_packs(config, Arc::new(PackRegistry::with_builtin_packs()))
    }

    /// Create a page drawing named components from `packs`.
    ///
    /// Fails when the configured pack is not registered. The selected pack's
    /// base stylesheet is added to the page up front.
    pub fn with_packs(config: &Config, packs: Arc<PackRegistry>) -> Result<Self> {
        let icons: Arc<dyn IconSource> = match &config.icon_dir {
            Some(dir) => Arc::new(IconDir::new(dir.clone())),
            None => Arc::new(NoIcons),
        };
        let mut page = Self::from_parts(config.document(), packs, icons);

        if let Some(name) = &config.pack {
            let pack = page.packs.get(name)?;
            tracing::debug!(
                pack = name.as_str(),
                components = pack.component_names().len(),
                "selected component pack"
            );
            let base_css = pack.base_css().to_string();
            page.document.add_style(&base_css);
            page.pack = Some(name.clone());
        }
        Ok(page)
    }

    fn from_parts(document: Document, packs: Arc<PackRegistry>, icons: Arc<dyn IconSource>) -> Self {
        let current = document.root();
        Self {
            document,
            current,
            packs,
            pack: None,
            icons,
            initialized: HashSet::new(),
        }
    }

    /// Replace the icon source
    pub fn with_icons(mut self, icons: impl IconSource + 'static) -> Self {
        self.icons = Arc::new(icons);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Node new content is attached under
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Name of the selected component pack
    pub fn pack(&self) -> Option<&str> {
        self.pack.as_deref()
    }

    pub(crate) fn set_current(&mut self, node: NodeId) -> NodeId {
        std::mem::replace(&mut self.current, node)
    }

    /// Create an element and attach it under the insertion point
    pub fn element(&mut self, name: &str, attrs: Attributes) -> Result<NodeId> {
        self.tag(name, attrs, ())
    }

    /// Create an element holding `content` and attach it under the insertion
    /// point. Content given to a void element is logged and dropped.
    pub fn tag(
        &mut self,
        name: &str,
        attrs: Attributes,
        content: impl Into<Content>,
    ) -> Result<NodeId> {
        let id = self.document.create_element(name, attrs);
        self.document.append(id, content)?;
        self.document.append(self.current, id)?;
        Ok(id)
    }

    /// Create an element and make it the insertion point until the scope ends
    pub fn open(&mut self, name: &str, attrs: Attributes) -> Result<Scope<'_>> {
        let id = self.element(name, attrs)?;
        Ok(Scope::new(self, id))
    }

    /// Make an existing node the insertion point until the scope ends
    pub fn enter(&mut self, node: NodeId) -> Result<Scope<'_>> {
        let target = self
            .document
            .tree()
            .get(node)
            .ok_or(DomError::NodeNotFound(node))?;
        if !target.is_container() {
            return Err(DomError::InvalidContent {
                parent: node,
                reason: "text nodes cannot hold children".to_string(),
            }
            .into());
        }
        Ok(Scope::new(self, node))
    }

    /// Add a paragraph of text
    pub fn text(&mut self, text: impl Into<String>) -> Result<NodeId> {
        self.tag("p", Attributes::new(), text.into())
    }

    /// Append markup verbatim under the insertion point
    pub fn raw(&mut self, markup: impl Into<String>) -> Result<()> {
        self.document.append(self.current, Content::raw(markup))?;
        Ok(())
    }

    /// Register page CSS. Returns `false` for a duplicate block.
    pub fn style(&mut self, css: &str) -> bool {
        self.document.add_style(css)
    }

    /// Link an external stylesheet from the head
    pub fn link_stylesheet(&mut self, href: impl Into<String>) {
        self.document.link_stylesheet(href);
    }

    /// Run `build` against the page's component context. Nothing is attached
    /// under the insertion point.
    pub fn with_context<T>(
        &mut self,
        build: impl FnOnce(&mut BuildContext<'_>) -> ComponentResult<T>,
    ) -> Result<T> {
        let mut ctx = BuildContext::new(&mut self.document, &*self.icons, &mut self.initialized);
        Ok(build(&mut ctx)?)
    }

    /// Build a component and attach it under the insertion point
    pub fn mount(&mut self, component: &dyn Component) -> Result<Built> {
        let built = self.with_context(|ctx| ctx.use_component(component))?;
        self.document.append(self.current, built.root)?;
        tracing::trace!(component = component.style_key(), root = %built.root, "mounted component");
        Ok(built)
    }

    /// Mount a component and make its slot the insertion point until the
    /// scope ends
    pub fn open_component(&mut self, component: &dyn Component) -> Result<Scope<'_>> {
        let built = self.mount(component)?;
        Ok(Scope::new(self, built.slot))
    }

    /// Mount a component from the selected pack by name
    pub fn component(&mut self, name: &str, props: Props) -> Result<Built> {
        let pack = self
            .pack
            .as_deref()
            .ok_or_else(|| Error::NoPackSelected(name.to_string()))?;
        let component = self.packs.create(pack, name, props)?;
        self.mount(component.as_ref())
    }

    /// Mount a named component and open its slot
    pub fn open_named(&mut self, name: &str, props: Props) -> Result<Scope<'_>> {
        let built = self.component(name, props)?;
        Ok(Scope::new(self, built.slot))
    }

    /// Serialize the page as a complete HTML document
    pub fn render(&mut self) -> String {
        ugui_html::render_document(&mut self.document)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::from_parts(
            Config::default().document(),
            Arc::new(PackRegistry::with_builtin_packs()),
            Arc::new(NoIcons),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ugui_components::{Card, MemoryIcons, NavBar, props};
    use ugui_dom::attrs;

    #[test]
    fn test_starts_at_root() {
        let page = Page::default();
        assert_eq!(page.current(), NodeId::ROOT);
        assert_eq!(page.pack(), None);
    }

    #[test]
    fn test_scope_restores_previous() {
        let mut page = Page::default();
        let outer = {
            let mut div = page.open("div", attrs! {}).unwrap();
            let outer = div.node();
            {
                let inner = div.open("section", attrs! {}).unwrap();
                assert_eq!(inner.current(), inner.node());
            }
            assert_eq!(div.current(), outer);
            outer
        };
        assert_eq!(page.current(), NodeId::ROOT);
        assert_eq!(page.document().tree().child_ids(NodeId::ROOT), &[outer]);
    }

    #[test]
    fn test_enter_rejects_text_nodes() {
        let mut page = Page::default();
        let p = page.text("hi").unwrap();
        let text = page.document().tree().child_ids(p)[0];
        assert!(matches!(
            page.enter(text),
            Err(Error::Dom(DomError::InvalidContent { .. }))
        ));
        assert!(page.enter(p).is_ok());
        assert_eq!(page.current(), NodeId::ROOT);
    }

    #[test]
    fn test_open_component_uses_slot() {
        let mut page = Page::default();
        let nav = page.open_component(&NavBar::new()).unwrap();
        assert_eq!(nav.document().tree().tag_name(nav.current()), Some("ul"));
    }

    #[test]
    fn test_named_component_requires_pack() {
        let mut page = Page::default();
        assert!(matches!(
            page.component("Button", props! { text: "Go" }),
            Err(Error::NoPackSelected(name)) if name == "Button"
        ));
    }

    #[test]
    fn test_pack_base_css_registered() {
        let page = Page::new(&Config::default().with_pack("og")).unwrap();
        assert_eq!(page.pack(), Some("og"));
        assert_eq!(page.document().styles().len(), 1);
    }

    #[test]
    fn test_card_sections_entered_lazily() {
        let mut page = Page::default().with_icons(MemoryIcons::new().with("star", "<svg></svg>"));
        let card = page.mount(&Card::new().contents("body")).unwrap().root;
        let header = page
            .with_context(|ctx| Card::header_section(ctx, card, Some("star")))
            .unwrap();
        page.enter(header).unwrap().text("Title").unwrap();

        let tree = page.document().tree();
        assert_eq!(tree.child_ids(card)[0], header);
        assert_eq!(tree.child_ids(card).len(), 2);
        assert_eq!(page.current(), NodeId::ROOT);
    }

    #[test]
    fn test_with_icons() {
        let mut page = Page::default().with_icons(MemoryIcons::new().with("home", "<svg></svg>"));
        assert!(page.mount(&ugui_components::MaterialIcon::new("home")).is_ok());
    }
}

//! Component packs
//!
//! A pack is a named set of component constructors sharing a page-wide base
//! stylesheet. Packs are registered explicitly with a [`PackRegistry`] and
//! selected by name through configuration.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::catalog::{
    Button, Card, Field, Fieldset, Form, Grid, Hero, IconBox, Link, MaterialIcon, NavBar, NavItem,
};
use crate::component::{Component, Restyled};
use crate::error::{ComponentError, ComponentResult};
use crate::props::Props;
use crate::theme::{OG_BASE_CSS, PLAIN_BASE_CSS, PLAIN_BUTTON_CSS, PLAIN_CARD_CSS, PLAIN_FORM_CSS};

/// Builds a component from its props
pub type Constructor = fn(Props) -> ComponentResult<Box<dyn Component>>;

macro_rules! constructor {
    ($ty:ty) => {
        (|props: Props| -> ComponentResult<Box<dyn Component>> {
            Ok(Box::new(<$ty>::from_props(props)?))
        }) as Constructor
    };
    ($ty:ty, $key:literal, $css:expr) => {
        (|props: Props| -> ComponentResult<Box<dyn Component>> {
            Ok(Box::new(Restyled::new(<$ty>::from_props(props)?, $key, $css)))
        }) as Constructor
    };
}

/// Named collection of component constructors
#[derive(Debug, Clone)]
pub struct Pack {
    name: String,
    base_css: Cow<'static, str>,
    components: HashMap<String, Constructor>,
}

impl Pack {
    pub fn new(name: impl Into<String>, base_css: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            base_css: base_css.into(),
            components: HashMap::new(),
        }
    }

    /// The themed pack: CSS variables with a dark variant, full catalog
    pub fn og() -> Self {
        Self::new("og", OG_BASE_CSS)
            .with("MaterialIcon", constructor!(MaterialIcon))
            .with("Button", constructor!(Button))
            .with("Card", constructor!(Card))
            .with("Hero", constructor!(Hero))
            .with("NavBar", constructor!(NavBar))
            .with("NavItem", constructor!(NavItem))
            .with("Form", constructor!(Form))
            .with("Fieldset", constructor!(Fieldset))
            .with("Field", constructor!(Field))
            .with("Grid", constructor!(Grid))
            .with("Box", constructor!(IconBox))
            .with("Link", constructor!(Link))
    }

    /// Minimal pack with fixed colours and no theme variables
    pub fn plain() -> Self {
        Self::new("plain", PLAIN_BASE_CSS)
            .with("Button", constructor!(Button, "plain-button", PLAIN_BUTTON_CSS))
            .with("Card", constructor!(Card, "plain-card", PLAIN_CARD_CSS))
            .with("Form", constructor!(Form, "plain-form", PLAIN_FORM_CSS))
            .with("Field", constructor!(Field, "plain-form", PLAIN_FORM_CSS))
            .with("Grid", constructor!(Grid))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stylesheet registered on every page using this pack
    pub fn base_css(&self) -> &str {
        &self.base_css
    }

    /// Add or replace a component constructor
    pub fn register(&mut self, component: impl Into<String>, constructor: Constructor) {
        self.components.insert(component.into(), constructor);
    }

    pub fn with(mut self, component: impl Into<String>, constructor: Constructor) -> Self {
        self.register(component, constructor);
        self
    }

    pub fn contains(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    /// Component names, sorted
    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct a component by name
    pub fn create(&self, component: &str, props: Props) -> ComponentResult<Box<dyn Component>> {
        let constructor =
            self.components
                .get(component)
                .ok_or_else(|| ComponentError::ComponentNotFound {
                    pack: self.name.clone(),
                    component: component.to_string(),
                })?;
        constructor(props)
    }
}

/// Registry of available packs
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    packs: HashMap<String, Pack>,
}

impl PackRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `og` and `plain` packs
    pub fn with_builtin_packs() -> Self {
        let mut registry = Self::new();
        registry.register(Pack::og());
        registry.register(Pack::plain());
        registry
    }

    /// Register a pack, returning any pack it replaces
    pub fn register(&mut self, pack: Pack) -> Option<Pack> {
        tracing::debug!(pack = pack.name(), components = pack.components.len(), "registered component pack");
        self.packs.insert(pack.name.clone(), pack)
    }

    pub fn get(&self, name: &str) -> ComponentResult<&Pack> {
        self.packs
            .get(name)
            .ok_or_else(|| ComponentError::PackNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packs.contains_key(name)
    }

    /// Pack names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct `component` from `pack`
    pub fn create(
        &self,
        pack: &str,
        component: &str,
        props: Props,
    ) -> ComponentResult<Box<dyn Component>> {
        self.get(pack)?.create(component, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    #[test]
    fn test_builtin_packs() {
        let registry = PackRegistry::with_builtin_packs();
        assert_eq!(registry.names(), vec!["og", "plain"]);

        let og = registry.get("og").unwrap();
        assert_eq!(og.component_names().len(), 12);
        assert!(og.contains("Box"));
        assert!(og.base_css().contains("--color-primary"));

        let plain = registry.get("plain").unwrap();
        assert_eq!(plain.component_names(), vec!["Button", "Card", "Field", "Form", "Grid"]);
        assert!(!plain.base_css().contains("var(--"));
    }

    #[test]
    fn test_lookup_failures() {
        let registry = PackRegistry::with_builtin_packs();
        assert!(matches!(
            registry.get("retro"),
            Err(ComponentError::PackNotFound(name)) if name == "retro"
        ));
        assert!(matches!(
            registry.create("plain", "Hero", Props::new()),
            Err(ComponentError::ComponentNotFound { pack, component })
                if pack == "plain" && component == "Hero"
        ));
    }

    #[test]
    fn test_plain_restyles() {
        let registry = PackRegistry::with_builtin_packs();
        let og = registry.create("og", "Button", props! { text: "Go" }).unwrap();
        let plain = registry.create("plain", "Button", props! { text: "Go" }).unwrap();
        assert_eq!(og.style_key(), "button");
        assert_eq!(plain.style_key(), "plain-button");
        assert!(!plain.style_text().contains("var(--"));
    }

    #[test]
    fn test_invalid_prop_surfaces() {
        let registry = PackRegistry::with_builtin_packs();
        assert!(matches!(
            registry.create("og", "Link", props! { icon_position: "top" }),
            Err(ComponentError::InvalidProp { .. })
        ));
    }

    #[test]
    fn test_custom_pack() {
        let mut registry = PackRegistry::new();
        let pack = Pack::new("mini", "body { margin: 0; }").with("Card", constructor!(Card));
        assert!(registry.register(pack).is_none());
        assert!(registry.create("mini", "Card", Props::new()).is_ok());
    }
}

use std::borrow::Cow;

use ugui_dom::{Attributes, Content, attrs};

use super::{MaterialIcon, root_attrs};
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const NAV_CSS: &str = r#"
.nav {
    width: 100%;
    padding: 1rem;
    background: var(--color-bg);
    border-bottom: 0.0625rem solid var(--color-border);
}
.nav-items {
    display: flex;
    list-style: none;
    padding: 0;
    margin: 0;
    gap: 1rem;
}
.nav-items.nav-column {
    flex-direction: column;
}
.nav-item {
    text-decoration: none;
    color: var(--color-text);
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    transition: color 0.2s ease;
}
.nav-item:hover {
    color: var(--color-primary);
}
.nav-item .material-icon {
    opacity: 0.8;
    transition: transform 0.2s ease, opacity 0.2s ease;
    display: inline-flex;
    align-items: center;
}
.nav-item:hover .material-icon {
    opacity: 1;
    transform: scale(1.1);
}
.nav-icon {
    display: inline-flex;
    width: 1.4rem;
    height: 1.4rem;
}
"#;

/// `<nav>` wrapping a `<ul>`. Nested content goes into the list, not the nav.
#[derive(Debug, Clone)]
pub struct NavBar {
    /// `row` or `column`
    pub direction: String,
    pub attrs: Attributes,
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            direction: "row".to_string(),
            attrs: Attributes::new(),
        }
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: "column".to_string(),
            ..Self::default()
        }
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            direction: props.take_str_or("direction", "row")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for NavBar {
    fn style_key(&self) -> &str {
        "nav"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(NAV_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let nav = ctx.element("nav", root_attrs(&self.attrs, "nav"));
        let class = format!("nav-items nav-{}", self.direction);
        let list = ctx.child(nav, "ul", attrs! { cls: class }, ())?;
        Ok(Built { root: nav, slot: list })
    }
}

/// Navigation entry: `<li><a class="nav-item">` with an optional icon.
///
/// A material icon takes precedence over raw icon markup.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub url: String,
    /// Raw icon markup
    pub icon: Option<String>,
    pub material_icon: Option<String>,
    pub icon_color: Option<String>,
    pub attrs: Attributes,
}

impl NavItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            icon: None,
            material_icon: None,
            icon_color: None,
            attrs: Attributes::new(),
        }
    }

    pub fn material_icon(mut self, name: impl Into<String>) -> Self {
        self.material_icon = Some(name.into());
        self
    }

    pub fn raw_icon(mut self, markup: impl Into<String>) -> Self {
        self.icon = Some(markup.into());
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            label: props.take_str_or("label", "")?,
            url: props.take_str_or("url", "#")?,
            icon: props.take_str("icon")?,
            material_icon: props.take_str("material_icon")?,
            icon_color: props.take_str("icon_color")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for NavItem {
    fn style_key(&self) -> &str {
        "nav"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(NAV_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let li = ctx.element("li", root_attrs(&self.attrs, ""));
        let link = ctx.child(li, "a", attrs! { href: self.url.as_str(), cls: "nav-item" }, ())?;

        let icon = match (&self.material_icon, &self.icon) {
            (Some(name), _) => {
                let mut icon = MaterialIcon::new(name).size("1.4rem");
                if let Some(color) = &self.icon_color {
                    icon = icon.color(color);
                }
                Some(Content::Node(ctx.use_component(&icon)?.root))
            }
            (None, Some(markup)) => Some(Content::raw(markup.as_str())),
            (None, None) => None,
        };
        if let Some(icon) = icon {
            ctx.child(link, "span", attrs! { cls: "nav-icon" }, icon)?;
        }

        ctx.child(link, "span", Attributes::new(), self.label.as_str())?;
        Ok(Built::leaf(li))
    }
}

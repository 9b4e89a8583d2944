use std::borrow::Cow;
use std::fmt;

use ugui_dom::{Attributes, attrs};

use super::{MaterialIcon, root_attrs};
use crate::component::{BuildContext, Built, Component};
use crate::error::{ComponentError, ComponentResult};
use crate::props::Props;

const LINK_CSS: &str = r#"
.link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: #0066cc;
    text-decoration: none;
    white-space: nowrap;
}
.link:hover {
    text-decoration: underline;
}
.link .link-icon {
    display: inline-flex;
    color: inherit;
    opacity: 0.8;
}
.link:hover .link-icon {
    opacity: 1;
}
.link .link-icon-left {
    order: -1;
}
.link .link-icon-right {
    order: 1;
}
.link .link-text {
    order: 0;
    display: inline-block;
    line-height: 1;
}
"#;

/// Side of the link text an icon is shown on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

impl IconPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for IconPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IconPosition {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ComponentError::InvalidProp {
                name: "icon_position".to_string(),
                reason: format!("expected 'left' or 'right', got '{other}'"),
            }),
        }
    }
}

/// Inline link with an optional icon. The icon is placed by CSS order, so
/// the markup always carries the text first.
#[derive(Debug, Clone)]
pub struct Link {
    pub text: String,
    pub url: String,
    pub material_icon: Option<String>,
    pub icon_position: IconPosition,
    pub icon_size: String,
    pub attrs: Attributes,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            material_icon: None,
            icon_position: IconPosition::Left,
            icon_size: "1.8rem".to_string(),
            attrs: Attributes::new(),
        }
    }

    pub fn icon(mut self, name: impl Into<String>, position: IconPosition) -> Self {
        self.material_icon = Some(name.into());
        self.icon_position = position;
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            text: props.take_str_or("text", "")?,
            url: props.take_str_or("url", "#")?,
            material_icon: props.take_str("material_icon")?,
            icon_position: props.take_str_or("icon_position", "left")?.parse()?,
            icon_size: props.take_str_or("icon_size", "1.8rem")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for Link {
    fn style_key(&self) -> &str {
        "link"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(LINK_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let mut attrs = attrs! { href: self.url.as_str() };
        attrs.extend(root_attrs(&self.attrs, "link"));
        let link = ctx.element("a", attrs);

        ctx.child(link, "span", attrs! { cls: "link-text" }, self.text.as_str())?;
        if let Some(name) = &self.material_icon {
            let icon = MaterialIcon::new(name)
                .size(self.icon_size.as_str())
                .class(&format!("link-icon link-icon-{}", self.icon_position));
            let icon = ctx.use_component(&icon)?;
            ctx.append(link, icon.root)?;
        }
        Ok(Built::leaf(link))
    }
}

use std::borrow::Cow;

use ugui_dom::{Attributes, Content};

use super::root_attrs;
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const ICON_CSS: &str = r#"
.material-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    vertical-align: middle;
}
.material-icon svg {
    display: block;
}
"#;

/// Inline SVG material icon: `<span class="material-icon icon-NAME">`
#[derive(Debug, Clone)]
pub struct MaterialIcon {
    pub name: String,
    pub size: String,
    pub color: String,
    pub attrs: Attributes,
}

impl MaterialIcon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: "1.5rem".to_string(),
            color: "currentColor".to_string(),
            attrs: Attributes::new(),
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Extra classes, placed after the icon classes
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        let name = props.require_str("name")?;
        let size = props.take_str_or("size", "1.5rem")?;
        let color = props.take_str_or("color", "currentColor")?;
        Ok(Self {
            name,
            size,
            color,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for MaterialIcon {
    fn style_key(&self) -> &str {
        "material-icon"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(ICON_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let svg = ctx.icons().load(&self.name)?;
        let sized = svg.replacen(
            "<svg",
            &format!(
                "<svg style=\"width: {}; height: {}; fill: {}\"",
                self.size, self.size, self.color
            ),
            1,
        );

        let attrs = root_attrs(&self.attrs, &format!("material-icon icon-{}", self.name));
        let span = ctx.element("span", attrs);
        ctx.append(span, Content::raw(sized))?;
        Ok(Built::leaf(span))
    }
}

use std::borrow::Cow;

use ugui_dom::{Attributes, attrs};

use super::{MaterialIcon, root_attrs};
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const GRID_CSS: &str = r#"
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 1rem;
    width: 100%;
    margin: 1rem 0;
}
"#;

const BOX_CSS: &str = r#"
.box {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
    padding: 1.5rem;
    background: var(--color-bg);
    border-radius: 0.5rem;
    box-shadow: 0 0 1rem var(--color-shadow);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.box:hover {
    transform: translateY(-2px);
    box-shadow: 0 0.5rem 2rem var(--color-shadow-hover);
}
.box-icon {
    flex: 0 0 auto;
    color: var(--color-primary);
    transition: transform 0.2s ease;
}
.box:hover .box-icon {
    transform: scale(1.1);
    color: var(--color-primary-hover);
}
.box-content {
    flex: 1;
    min-width: 0;
}
.box-content h3 {
    margin-bottom: 0.5rem;
    color: var(--color-primary);
}
"#;

const DEFAULT_COLS: &str = "auto-fit";
const DEFAULT_MIN_WIDTH: &str = "250px";
const DEFAULT_GAP: &str = "1rem";

/// Responsive CSS grid.
///
/// The shared `.grid` rule carries the default track sizing; other column
/// settings are written to the element's inline style so differently
/// configured grids can share a page.
#[derive(Debug, Clone)]
pub struct Grid {
    pub cols: String,
    pub min_width: String,
    pub gap: String,
    pub attrs: Attributes,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS.to_string(),
            min_width: DEFAULT_MIN_WIDTH.to_string(),
            gap: DEFAULT_GAP.to_string(),
            attrs: Attributes::new(),
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cols(mut self, cols: impl ToString) -> Self {
        self.cols = cols.to_string();
        self
    }

    pub fn min_width(mut self, min_width: impl Into<String>) -> Self {
        self.min_width = min_width.into();
        self
    }

    pub fn gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            cols: props.take_str_or("cols", DEFAULT_COLS)?,
            min_width: props.take_str_or("min_width", DEFAULT_MIN_WIDTH)?,
            gap: props.take_str_or("gap", DEFAULT_GAP)?,
            attrs: props.into_attributes(),
        })
    }

    fn inline_style(&self) -> Option<String> {
        let mut style = Vec::new();
        if self.cols != DEFAULT_COLS || self.min_width != DEFAULT_MIN_WIDTH {
            style.push(format!(
                "grid-template-columns: repeat({}, minmax({}, 1fr));",
                self.cols, self.min_width
            ));
        }
        if self.gap != DEFAULT_GAP {
            style.push(format!("gap: {};", self.gap));
        }
        if let Some(existing) = self.attrs.get_str("style") {
            style.push(existing.to_string());
        }
        (!style.is_empty()).then(|| style.join(" "))
    }
}

impl Component for Grid {
    fn style_key(&self) -> &str {
        "grid"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(GRID_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let mut attrs = root_attrs(&self.attrs, "grid");
        if let Some(style) = self.inline_style() {
            attrs.insert("style", style);
        }
        Ok(Built::leaf(ctx.element("div", attrs)))
    }
}

/// Feature box: optional icon column beside a content column that receives
/// nested content
#[derive(Debug, Clone)]
pub struct IconBox {
    pub material_icon: Option<String>,
    pub icon_size: String,
    pub icon_color: Option<String>,
    pub attrs: Attributes,
}

impl Default for IconBox {
    fn default() -> Self {
        Self {
            material_icon: None,
            icon_size: "2.5rem".to_string(),
            icon_color: None,
            attrs: Attributes::new(),
        }
    }
}

impl IconBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.material_icon = Some(name.into());
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            material_icon: props.take_str("material_icon")?,
            icon_size: props.take_str_or("icon_size", "2.5rem")?,
            icon_color: props.take_str("icon_color")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for IconBox {
    fn style_key(&self) -> &str {
        "box"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(BOX_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let root = ctx.element("div", root_attrs(&self.attrs, "box"));

        if let Some(name) = &self.material_icon {
            let mut icon = MaterialIcon::new(name).size(self.icon_size.as_str());
            if let Some(color) = &self.icon_color {
                icon = icon.color(color);
            }
            let icon = ctx.use_component(&icon)?;
            ctx.child(root, "div", attrs! { cls: "box-icon" }, icon.root)?;
        }

        let content = ctx.child(root, "div", attrs! { cls: "box-content" }, ())?;
        Ok(Built { root, slot: content })
    }
}

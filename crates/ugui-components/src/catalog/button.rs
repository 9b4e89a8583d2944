use std::borrow::Cow;

use ugui_dom::{Attributes, Content};

use super::{MaterialIcon, root_attrs};
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const BUTTON_CSS: &str = r#"
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background: var(--color-primary);
    color: var(--color-bg);
    text-decoration: none;
    border-radius: 0.25rem;
    margin: 0.5rem;
    border: none;
    cursor: pointer;
    transition: all 0.2s ease;
    position: relative;
    box-shadow: 0 2px 4px var(--color-shadow);
    transform: translateY(0);
}
.btn:hover {
    background: var(--color-primary-hover);
    box-shadow: 0 4px 8px var(--color-shadow-hover);
    transform: translateY(-1px);
}
.btn:active {
    transform: translateY(1px);
    box-shadow: 0 1px 2px var(--color-shadow);
}
.btn.secondary {
    background: transparent;
    border: 1px solid var(--color-primary);
    color: var(--color-primary);
    box-shadow: none;
}
.btn.secondary:hover {
    background: var(--color-primary-bg);
    border-color: var(--color-primary-hover);
    color: var(--color-primary-hover);
    box-shadow: 0 2px 4px var(--color-shadow);
}
.btn.secondary:active {
    background: var(--color-primary-bg-hover);
    transform: translateY(1px);
    box-shadow: none;
}
.btn .material-icon {
    margin-right: -0.25rem;
    margin-left: -0.25rem;
    transition: transform 0.2s ease;
}
.btn:hover .material-icon {
    transform: scale(1.1);
}
.btn:active .material-icon {
    transform: scale(0.95);
}
"#;

/// `<button class="btn">` with an optional leading icon.
///
/// `text` wins over `contents` when both are set.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub text: Option<String>,
    pub material_icon: Option<String>,
    pub contents: Content,
    pub attrs: Attributes,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.material_icon = Some(name.into());
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        let text = props.take_str("text")?;
        let material_icon = props.take_str("material_icon")?;
        let contents = props.take_str("contents")?.into();
        Ok(Self {
            text,
            material_icon,
            contents,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for Button {
    fn style_key(&self) -> &str {
        "button"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(BUTTON_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let button = ctx.element("button", root_attrs(&self.attrs, "btn"));

        if let Some(name) = &self.material_icon {
            let icon = ctx.use_component(&MaterialIcon::new(name).size("1.8rem"))?;
            ctx.append(button, icon.root)?;
        }

        match self.text.as_deref() {
            Some(text) if !text.is_empty() => ctx.append(button, text)?,
            _ => ctx.append(button, self.contents.clone())?,
        }
        Ok(Built::leaf(button))
    }
}

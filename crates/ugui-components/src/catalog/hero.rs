use std::borrow::Cow;

use ugui_dom::{Attributes, attrs};

use super::root_attrs;
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const HERO_CSS: &str = r#"
.hero {
    text-align: center;
    padding: 4rem 2rem;
    background: var(--color-bg-subtle);
    margin: 0;
}
.hero-title {
    font-size: 2.5rem;
    margin-bottom: 1rem;
    color: var(--color-text);
}
.hero-subtitle {
    font-size: 1.25rem;
    color: var(--color-text-secondary);
    margin-bottom: 2rem;
}
.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
}
"#;

/// Page banner with title, subtitle and an actions row for nested content
#[derive(Debug, Clone, Default)]
pub struct Hero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub attrs: Attributes,
}

impl Hero {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            title: props.take_str("title")?,
            subtitle: props.take_str("subtitle")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for Hero {
    fn style_key(&self) -> &str {
        "hero"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(HERO_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let hero = ctx.element("div", root_attrs(&self.attrs, "hero"));
        if let Some(title) = &self.title {
            ctx.child(hero, "h1", attrs! { cls: "hero-title" }, title)?;
        }
        if let Some(subtitle) = &self.subtitle {
            ctx.child(hero, "p", attrs! { cls: "hero-subtitle" }, subtitle)?;
        }
        let actions = ctx.child(hero, "div", attrs! { cls: "hero-actions" }, ())?;
        Ok(Built { root: hero, slot: actions })
    }
}

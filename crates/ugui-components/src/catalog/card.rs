use std::borrow::Cow;

use ugui_dom::{Attributes, Content, NodeId, attrs};

use super::{MaterialIcon, root_attrs};
use crate::component::{BuildContext, Built, Component};
use crate::error::ComponentResult;
use crate::props::Props;

const CARD_CSS: &str = r#"
.card {
    width: 100%;
    max-width: 100%;
    box-sizing: border-box;
    border: 0.0625rem solid var(--color-border);
    border-radius: 0.25rem;
    margin: 1rem 0;
    overflow: hidden;
    background: var(--color-bg);
}
.card-header {
    padding: 1rem;
    border-bottom: 0.0625rem solid var(--color-border);
    background: var(--color-bg-subtle);
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.card-header .material-icon {
    color: var(--color-primary);
    opacity: 0.9;
    transition: transform 0.2s ease;
    height: 1.8rem;
}
.card-header:hover .material-icon {
    transform: scale(1.1);
    opacity: 1;
}
.card-body { padding: 1rem; }
.card-footer {
    padding: 1rem;
    border-top: 0.0625rem solid var(--color-border);
    background: var(--color-bg-subtle);
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.card-footer .material-icon {
    color: var(--color-primary);
    opacity: 0.9;
    transition: transform 0.2s ease;
    height: 1.8rem;
}
.card-footer:hover .material-icon {
    transform: scale(1.1);
    opacity: 1;
}
"#;

/// Card with optional header and footer. Nested content goes into the body.
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub title: Option<String>,
    pub footer: Option<String>,
    pub header_icon: Option<String>,
    pub footer_icon: Option<String>,
    pub contents: Content,
    pub attrs: Attributes,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn header_icon(mut self, name: impl Into<String>) -> Self {
        self.header_icon = Some(name.into());
        self
    }

    pub fn footer_icon(mut self, name: impl Into<String>) -> Self {
        self.footer_icon = Some(name.into());
        self
    }

    pub fn contents(mut self, contents: impl Into<Content>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            title: props.take_str("title")?,
            footer: props.take_str("footer")?,
            header_icon: props.take_str("header_icon")?,
            footer_icon: props.take_str("footer_icon")?,
            contents: props.take_str("contents")?.into(),
            attrs: props.into_attributes(),
        })
    }

    /// Header or footer section: icon first, then text
    fn section(
        ctx: &mut BuildContext<'_>,
        card: NodeId,
        class: &str,
        icon: Option<&str>,
        text: Option<&str>,
    ) -> ComponentResult<()> {
        if icon.is_none() && text.is_none() {
            return Ok(());
        }
        let section = ctx.element("div", attrs! { cls: class });
        if let Some(name) = icon {
            let icon = ctx.use_component(&MaterialIcon::new(name).size("1.8rem"))?;
            ctx.append(section, icon.root)?;
        }
        ctx.append(section, text)?;
        ctx.append(card, section)
    }

    /// Existing child of `card` carrying `class`
    fn find_section(ctx: &mut BuildContext<'_>, card: NodeId, class: &str) -> Option<NodeId> {
        let tree = ctx.document().tree();
        tree.children(card)
            .find(|(_, node)| {
                node.as_element()
                    .is_some_and(|element| element.get_attr("class") == Some(class))
            })
            .map(|(id, _)| id)
    }

    /// Header of a built card, created as its first child when missing.
    /// An icon is placed ahead of the existing header content.
    pub fn header_section(
        ctx: &mut BuildContext<'_>,
        card: NodeId,
        icon: Option<&str>,
    ) -> ComponentResult<NodeId> {
        let header = match Self::find_section(ctx, card, "card-header") {
            Some(header) => header,
            None => {
                let header = ctx.element("div", attrs! { cls: "card-header" });
                ctx.document().tree_mut().insert_child(card, 0, header)?;
                header
            }
        };
        Self::prepend_icon(ctx, header, icon)?;
        Ok(header)
    }

    /// Footer of a built card, appended as its last child when missing
    pub fn footer_section(
        ctx: &mut BuildContext<'_>,
        card: NodeId,
        icon: Option<&str>,
    ) -> ComponentResult<NodeId> {
        let footer = match Self::find_section(ctx, card, "card-footer") {
            Some(footer) => footer,
            None => ctx.child(card, "div", attrs! { cls: "card-footer" }, ())?,
        };
        Self::prepend_icon(ctx, footer, icon)?;
        Ok(footer)
    }

    fn prepend_icon(
        ctx: &mut BuildContext<'_>,
        section: NodeId,
        icon: Option<&str>,
    ) -> ComponentResult<()> {
        if let Some(name) = icon {
            let icon = ctx.use_component(&MaterialIcon::new(name).size("1.8rem"))?;
            ctx.document().tree_mut().insert_child(section, 0, icon.root)?;
        }
        Ok(())
    }
}

impl Component for Card {
    fn style_key(&self) -> &str {
        "card"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(CARD_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let card = ctx.element("div", root_attrs(&self.attrs, "card"));

        Self::section(
            ctx,
            card,
            "card-header",
            self.header_icon.as_deref(),
            self.title.as_deref(),
        )?;
        let body = ctx.child(card, "div", attrs! { cls: "card-body" }, self.contents.clone())?;
        Self::section(
            ctx,
            card,
            "card-footer",
            self.footer_icon.as_deref(),
            self.footer.as_deref(),
        )?;

        Ok(Built { root: card, slot: body })
    }
}

use std::borrow::Cow;

use ugui_dom::{Attributes, attrs};

use super::root_attrs;
use crate::color::fnv1a;
use crate::component::{BuildContext, Built, Component, apply_tooltip};
use crate::error::ComponentResult;
use crate::props::Props;

const FORM_CSS: &str = r#"
.form-field {
    margin-bottom: 1rem;
    width: 100%;
    box-sizing: border-box;
}
.form-field label {
    display: block;
    margin-bottom: 0.5rem;
    color: var(--color-text);
}
.form-field input {
    box-sizing: border-box;
    width: 100%;
    padding: 0.5rem;
    border: 0.0625rem solid var(--color-border);
    border-radius: 0.25rem;
    background: var(--color-bg);
    color: var(--color-text);
}
.form-field input:focus {
    outline: none;
    border-color: var(--color-primary);
    box-shadow: 0 0 0 2px var(--color-primary-bg);
}
.form-field input::placeholder {
    color: var(--color-text-secondary);
}
form { width: 100%; }
"#;

const FIELDSET_CSS: &str = r#"
fieldset {
    border: 0.0625rem solid var(--color-border);
    padding: 1rem;
    border-radius: 0.25rem;
    margin-bottom: 1rem;
    background: var(--color-bg);
}
legend {
    padding: 0 0.5rem;
    font-weight: bold;
    color: var(--color-text);
    background: var(--color-bg);
}
"#;

/// `<form action method>`; nested content goes into the form
#[derive(Debug, Clone)]
pub struct Form {
    pub action: String,
    pub method: String,
    pub attrs: Attributes,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            action: "#".to_string(),
            method: "post".to_string(),
            attrs: Attributes::new(),
        }
    }
}

impl Form {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            action: props.take_str_or("action", "#")?,
            method: props.take_str_or("method", "post")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for Form {
    fn style_key(&self) -> &str {
        "form"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(FORM_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let mut attrs = attrs! { action: self.action.as_str(), method: self.method.as_str() };
        attrs.extend(root_attrs(&self.attrs, ""));
        Ok(Built::leaf(ctx.element("form", attrs)))
    }
}

/// `<fieldset>` with an optional legend
#[derive(Debug, Clone, Default)]
pub struct Fieldset {
    pub legend: Option<String>,
    pub attrs: Attributes,
}

impl Fieldset {
    pub fn new(legend: impl Into<String>) -> Self {
        Self {
            legend: Some(legend.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            legend: props.take_str("legend")?,
            attrs: props.into_attributes(),
        })
    }
}

impl Component for Fieldset {
    fn style_key(&self) -> &str {
        "fieldset"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(FIELDSET_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let fieldset = ctx.element("fieldset", root_attrs(&self.attrs, ""));
        if let Some(legend) = &self.legend {
            ctx.child(fieldset, "legend", Attributes::new(), legend)?;
        }
        Ok(Built::leaf(fieldset))
    }
}

/// Labelled input: `<div class="form-field"><label/><input/></div>`.
///
/// Extra attributes go on the `<input>`. Without an explicit id the input
/// id falls back to the name, then to one derived from type and label.
#[derive(Debug, Clone)]
pub struct Field {
    pub label: String,
    pub input_type: String,
    pub name: Option<String>,
    pub id: Option<String>,
    pub attrs: Attributes,
}

impl Field {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input_type: "text".to_string(),
            name: None,
            id: None,
            attrs: Attributes::new(),
        }
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<ugui_dom::AttrValue>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    pub fn from_props(mut props: Props) -> ComponentResult<Self> {
        Ok(Self {
            label: props.take_str_or("label", "")?,
            input_type: props.take_str_or("input_type", "text")?,
            name: props.take_str("name")?,
            id: props.take_str("id")?,
            attrs: props.into_attributes(),
        })
    }

    fn field_id(&self) -> String {
        match (&self.id, &self.name) {
            (Some(id), _) => id.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => format!("field-{}-{:08x}", self.input_type, fnv1a(&self.label)),
        }
    }
}

impl Component for Field {
    fn style_key(&self) -> &str {
        "form"
    }

    fn style_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(FORM_CSS)
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> ComponentResult<Built> {
        let field_id = self.field_id();
        let name = self.name.clone().unwrap_or_else(|| field_id.clone());

        let wrapper = ctx.element("div", attrs! { cls: "form-field" });
        ctx.child(wrapper, "label", attrs! { for_: field_id.as_str() }, self.label.as_str())?;

        let mut input = attrs! {
            type_: self.input_type.as_str(),
            id: field_id.as_str(),
            name: name,
        };
        input.extend(self.attrs.clone());
        apply_tooltip(&mut input);
        ctx.child(wrapper, "input", input, ())?;

        Ok(Built::leaf(wrapper))
    }
}

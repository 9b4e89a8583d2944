//! uGUI HTML - markup output for uGUI documents
//!
//! Turns a [`ugui_dom::DomTree`] into minified or pretty-printed HTML.

mod escape;
mod serializer;

pub use escape::{escape_attribute, escape_text};
pub use serializer::{HtmlSerializer, render_document};

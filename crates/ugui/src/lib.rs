//! uGUI - declarative HTML page builder
//!
//! Pages are built by attaching elements and components under a current
//! insertion point, then rendered to a single HTML5 document with a
//! reconciled `<head>` and the page's collected CSS.
//!
//! ```no_run
//! use ugui::{Config, attrs, render_page};
//!
//! let html = render_page(&Config::default(), |page| {
//!     let mut main = page.open("main", attrs! {})?;
//!     main.tag("h1", attrs! {}, "Hello")?;
//!     main.text("World")?;
//!     Ok(())
//! })?;
//! # Ok::<(), ugui::Error>(())
//! ```

mod config;
mod error;
mod page;
mod scope;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use page::Page;
pub use scope::Scope;

pub use ugui_components::{
    Built, Component, IconDir, IconSource, MemoryIcons, NoIcons, Pack, PackRegistry, Props,
    catalog, colorhash, props,
};
pub use ugui_dom::{Attributes, Content, Document, NodeId, StyleMode, attrs};
pub use ugui_html::HtmlSerializer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build one page with `build` and render it
pub fn render_page(config: &Config, build: impl FnOnce(&mut Page) -> Result<()>) -> Result<String> {
    let mut page = Page::new(config)?;
    build(&mut page)?;
    Ok(page.render())
}

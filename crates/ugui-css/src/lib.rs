//! uGUI CSS Registry
//!
//! Collects the raw CSS blocks contributed while a page is built and renders
//! them once, deduplicated and in a stable order.

mod minify;
mod priority;
mod registry;

pub use minify::{dedent, minify};
pub use priority::{rule_priority, DEFAULT_PRIORITY, PRIORITY_TABLE};
pub use registry::{CssRegistry, RegistryStats};

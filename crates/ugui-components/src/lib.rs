//! uGUI Components - prebuilt UI building blocks
//!
//! A component builds a detached subtree and names the CSS it needs. Styles
//! are registered once per page no matter how many instances are built.
//! Components are grouped into named packs selected by configuration.

pub mod catalog;
mod color;
mod component;
mod error;
mod icons;
mod pack;
mod props;
mod theme;

pub use catalog::{
    Button, Card, Field, Fieldset, Form, Grid, Hero, IconBox, IconPosition, Link, MaterialIcon, NavBar,
    NavItem,
};
pub use color::{colorhash, fnv1a};
pub use component::{BuildContext, Built, Component, Restyled, apply_tooltip};
pub use error::{ComponentError, ComponentResult};
pub use icons::{IconDir, IconSource, MemoryIcons, NoIcons};
pub use pack::{Constructor, Pack, PackRegistry};
pub use props::Props;
pub use theme::{OG_BASE_CSS, PLAIN_BASE_CSS};

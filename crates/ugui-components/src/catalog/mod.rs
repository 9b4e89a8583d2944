//! Built-in components
//!
//! Every component accepts extra attributes for its root element; a
//! `title` attribute becomes a tooltip (`data-tooltip` plus `aria-label`).

mod button;
mod card;
mod form;
mod hero;
mod icon;
mod layout;
mod link;
mod nav;

pub use button::Button;
pub use card::Card;
pub use form::{Field, Fieldset, Form};
pub use hero::Hero;
pub use icon::MaterialIcon;
pub use layout::{Grid, IconBox};
pub use link::{IconPosition, Link};
pub use nav::{NavBar, NavItem};

use ugui_dom::Attributes;

use crate::component::apply_tooltip;

/// Root attributes: caller attributes with `class` prefixed and the
/// tooltip rule applied
fn root_attrs(attrs: &Attributes, class: &str) -> Attributes {
    let mut attrs = attrs.clone();
    if !class.is_empty() {
        attrs.add_class(class);
    }
    apply_tooltip(&mut attrs);
    attrs
}

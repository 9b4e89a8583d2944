//! Insertion point guard

use std::ops::{Deref, DerefMut};

use ugui_dom::NodeId;

use crate::page::Page;

/// An open container on a [`Page`].
///
/// While the scope is alive, new content is attached under its node. Dropping
/// the scope restores the insertion point that was current when it was
/// opened, on every exit path including unwinding.
pub struct Scope<'p> {
    page: &'p mut Page,
    previous: NodeId,
    node: NodeId,
}

impl<'p> Scope<'p> {
    pub(crate) fn new(page: &'p mut Page, node: NodeId) -> Self {
        let previous = page.set_current(node);
        Self {
            page,
            previous,
            node,
        }
    }

    /// The element this scope appends into
    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl Deref for Scope<'_> {
    type Target = Page;

    fn deref(&self) -> &Page {
        &*self.page
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Page {
        &mut *self.page
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.page.set_current(self.previous);
    }
}

//! Page builder errors

use ugui_components::ComponentError;
use ugui_dom::DomError;

use crate::config::ConfigError;

/// Result type for page building
pub type Result<T> = std::result::Result<T, Error>;

/// Page builder errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A named component was requested but the page has no pack
    #[error("no component pack selected for component '{0}'")]
    NoPackSelected(String),
}

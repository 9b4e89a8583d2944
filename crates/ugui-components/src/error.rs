//! Component errors

use ugui_dom::DomError;

/// Result type for component operations
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Component lookup and build errors
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("component pack '{0}' is not registered")]
    PackNotFound(String),

    #[error("component '{component}' not found in pack '{pack}'")]
    ComponentNotFound { pack: String, component: String },

    /// Icon asset missing from its source
    #[error("icon '{name}' not found in {location}")]
    IconNotFound { name: String, location: String },

    #[error("failed to read icon: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid prop '{name}': {reason}")]
    InvalidProp { name: String, reason: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

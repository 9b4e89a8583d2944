//! Appendable content
//!
//! Everything a builder call may place inside an element: text, raw markup,
//! an existing node, or a list of those.

use crate::NodeId;

/// Content accepted by [`crate::Document::append`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Plain text
    Text(String),
    /// Markup emitted verbatim
    Raw(String),
    /// An existing node, moved under the new parent
    Node(NodeId),
    List(Vec<Content>),
}

impl Content {
    /// Raw (unescaped) markup
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Whether appending this would add nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Node(_) => false,
            Self::List(items) => items.iter().all(Content::is_empty),
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NodeId> for Content {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Content::Empty.is_empty());
        assert!(Content::from("").is_empty());
        assert!(Content::from(None::<&str>).is_empty());
        assert!(Content::from(vec![Content::Empty, Content::from("")]).is_empty());
        assert!(!Content::from("x").is_empty());
        assert!(!Content::from(NodeId(3)).is_empty());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Content::from(["a", "b"]), Content::List(vec![
            Content::Text("a".into()),
            Content::Text("b".into()),
        ]));
        assert_eq!(Content::raw("<b>"), Content::Raw("<b>".into()));
    }
}

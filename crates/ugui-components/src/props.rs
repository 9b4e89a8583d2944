//! Component properties
//!
//! An ordered bag of named values handed to pack constructors. Components
//! take the props they understand; whatever is left becomes attributes of
//! the component's root element.

use ugui_dom::{AttrValue, Attributes, normalize_attr_name};

use crate::error::{ComponentError, ComponentResult};

/// Ordered property bag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, AttrValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop, replacing an earlier value under the same (normalized) name
    pub fn insert(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.position(name) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// `material_icon` and `material-icon` name the same prop
    fn position(&self, name: &str) -> Option<usize> {
        let wanted = normalize_attr_name(name);
        self.entries
            .iter()
            .position(|(key, _)| normalize_attr_name(key) == wanted)
    }

    /// Remove and return a prop
    pub fn take(&mut self, name: &str) -> Option<AttrValue> {
        self.position(name).map(|index| self.entries.remove(index).1)
    }

    /// Take a textual prop. Numbers are accepted and formatted; booleans are
    /// rejected.
    pub fn take_str(&mut self, name: &str) -> ComponentResult<Option<String>> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Bool(_)) => Err(ComponentError::InvalidProp {
                name: name.to_string(),
                reason: "expected text, got a boolean".to_string(),
            }),
            Some(value) => Ok(Some(value.to_string())),
        }
    }

    /// Take a textual prop that must be present
    pub fn require_str(&mut self, name: &str) -> ComponentResult<String> {
        self.take_str(name)?.ok_or_else(|| ComponentError::InvalidProp {
            name: name.to_string(),
            reason: "required".to_string(),
        })
    }

    pub fn take_str_or(&mut self, name: &str, default: &str) -> ComponentResult<String> {
        Ok(self.take_str(name)?.unwrap_or_else(|| default.to_string()))
    }

    pub fn take_bool(&mut self, name: &str) -> ComponentResult<Option<bool>> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(ComponentError::InvalidProp {
                name: name.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    }

    /// Remaining props as element attributes
    pub fn into_attributes(self) -> Attributes {
        self.entries.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, value) in iter {
            props.insert(name.as_ref(), value);
        }
        props
    }
}

/// Build a [`Props`] bag with `attrs!` syntax
#[macro_export]
macro_rules! props {
    (@key $key:ident) => {
        stringify!($key)
    };
    (@key $key:literal) => {
        $key
    };
    () => {
        $crate::Props::new()
    };
    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(
            props.insert($crate::props!(@key $key), $value);
        )+
        props
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_matches_normalized_names() {
        let mut props = props! { "material-icon": "home", text: "Go" };
        assert_eq!(props.take_str("material_icon").unwrap().as_deref(), Some("home"));
        assert!(!props.contains("material_icon"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_take_str_or_default() {
        let mut props = props! { size: 3 };
        assert_eq!(props.take_str_or("size", "1rem").unwrap(), "3");
        assert_eq!(props.take_str_or("color", "currentColor").unwrap(), "currentColor");
    }

    #[test]
    fn test_require_str() {
        let mut props = props! { name: "home" };
        assert_eq!(props.require_str("name").unwrap(), "home");
        assert!(matches!(
            props.require_str("name"),
            Err(ComponentError::InvalidProp { reason, .. }) if reason == "required"
        ));
    }

    #[test]
    fn test_type_mismatch_is_invalid_prop() {
        let mut props = props! { label: true, open: "yes" };
        assert!(matches!(
            props.take_str("label"),
            Err(ComponentError::InvalidProp { .. })
        ));
        assert!(matches!(
            props.take_bool("open"),
            Err(ComponentError::InvalidProp { .. })
        ));
    }

    #[test]
    fn test_leftovers_become_attributes() {
        let mut props = props! { text: "Save", cls: "primary", data_id: 4, disabled: true };
        props.take("text");
        let attrs = props.into_attributes();
        assert_eq!(attrs.names(), vec!["class", "data-id", "disabled"]);
    }
}

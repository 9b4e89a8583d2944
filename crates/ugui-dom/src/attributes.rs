//! Element Attributes
//!
//! Ordered attribute map with builder-friendly name normalization.

use std::collections::HashMap;
use std::fmt;

/// Attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    /// `true` renders as a bare attribute name, `false` omits the attribute
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl AttrValue {
    /// String payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! int_attr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

int_attr!(i32, i64, u8, u16, u32, usize);

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Normalize a builder-side attribute name to its HTML form.
///
/// - `cls` / `className` become `class`
/// - a raw identifier prefix (`r#type`) and one trailing underscore (`for_`) are dropped
/// - `__` then any remaining `_` become `-`
pub fn normalize_attr_name(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    if name == "cls" || name == "className" {
        return "class".to_string();
    }
    let name = name.strip_suffix('_').unwrap_or(name);
    if name == "cls" {
        return "class".to_string();
    }
    name.replace("__", "-").replace('_', "-")
}

/// Ordered attribute map.
///
/// Insertion order is render order. Setting an existing name (including
/// through an alias such as `cls`) overwrites the value in place.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
    by_name: HashMap<String, usize>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set an attribute, normalizing its name. Returns the previous value.
    ///
    /// A name that normalizes to nothing (`_`, `r#_`) is logged and dropped.
    pub fn insert(&mut self, name: &str, value: impl Into<AttrValue>) -> Option<AttrValue> {
        let normalized = normalize_attr_name(name);
        if normalized.is_empty() {
            tracing::warn!(name, "attribute name is empty after normalization, dropping it");
            return None;
        }
        let name = normalized;
        let value = value.into();
        if let Some(&index) = self.by_name.get(&name) {
            Some(std::mem::replace(&mut self.entries[index].1, value))
        } else {
            self.by_name.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    /// Builder form of [`Attributes::insert`]
    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get attribute by (normalized) name
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.by_name
            .get(&normalize_attr_name(name))
            .map(|&i| &self.entries[i].1)
    }

    /// Get a string attribute value
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&normalize_attr_name(name))
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.by_name.remove(&normalize_attr_name(name))?;
        // Update indices for items after removed
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    /// Prepend classes to the `class` attribute, keeping any existing ones after them
    pub fn add_class(&mut self, class: &str) {
        let merged = match self.get_str("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{class} {}", existing.trim()),
            _ => class.to_string(),
        };
        self.insert("class", merged);
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Get attribute names
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Order-insensitive comparison of the full attribute set
    pub fn same_set(&self, other: &Attributes) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }

    /// Merge another map into this one; later values win
    pub fn extend(&mut self, other: Attributes) {
        for (name, value) in other.entries {
            self.insert(&name, value);
        }
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name.as_ref(), value);
        }
        attrs
    }
}

/// Build an [`Attributes`] map.
///
/// Keys are identifiers (normalized, so `cls`, `for_` and `aria_label` work)
/// or string literals.
///
/// ```
/// use ugui_dom::attrs;
///
/// let attrs = attrs! { cls: "btn", type_: "submit", "data-id": 3, disabled: true };
/// assert_eq!(attrs.get_str("class"), Some("btn"));
/// assert_eq!(attrs.get_str("type"), Some("submit"));
/// ```
#[macro_export]
macro_rules! attrs {
    (@key $key:ident) => {
        stringify!($key)
    };
    (@key $key:literal) => {
        $key
    };
    () => {
        $crate::Attributes::new()
    };
    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $(
            attrs.insert($crate::attrs!(@key $key), $value);
        )+
        attrs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_attr_name("cls"), "class");
        assert_eq!(normalize_attr_name("className"), "class");
        assert_eq!(normalize_attr_name("class_"), "class");
        assert_eq!(normalize_attr_name("for_"), "for");
        assert_eq!(normalize_attr_name("r#type"), "type");
    }

    #[test]
    fn test_normalize_underscores() {
        assert_eq!(normalize_attr_name("aria_label"), "aria-label");
        assert_eq!(normalize_attr_name("data__theme_switcher"), "data-theme-switcher");
        assert_eq!(normalize_attr_name("aria_label_"), "aria-label");
        assert_eq!(normalize_attr_name("href"), "href");
        assert_eq!(normalize_attr_name("data-tooltip"), "data-tooltip");
    }

    #[test]
    fn test_empty_name_dropped() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.insert("_", "x"), None);
        assert_eq!(attrs.insert("r#_", true), None);
        assert_eq!(attrs.insert("", "y"), None);
        assert!(attrs.is_empty());
        assert_eq!(attrs! { "_": "x", id: "a" }.names(), vec!["id"]);
    }

    #[test]
    fn test_alias_overwrites_in_place() {
        let mut attrs = Attributes::new();
        attrs.insert("id", "main");
        attrs.insert("cls", "a");
        attrs.insert("class_", "b");

        assert_eq!(attrs.names(), vec!["id", "class"]);
        assert_eq!(attrs.get_str("class"), Some("b"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = Attributes::new();
        attrs.insert("foo", "bar");
        attrs.insert("baz", "qux");

        assert!(attrs.contains("foo"));
        attrs.remove("foo");
        assert!(!attrs.contains("foo"));
        assert_eq!(attrs.get_str("baz"), Some("qux"));
    }

    #[test]
    fn test_same_set_ignores_order() {
        let a = Attributes::new().with("name", "viewport").with("content", "x");
        let b = Attributes::new().with("content", "x").with("name", "viewport");
        let c = Attributes::new().with("name", "viewport");

        assert!(a.same_set(&b));
        assert!(!a.same_set(&c));
    }

    #[test]
    fn test_add_class() {
        let mut attrs = attrs! { cls: "primary" };
        attrs.add_class("btn");
        assert_eq!(attrs.get_str("class"), Some("btn primary"));

        let mut empty = Attributes::new();
        empty.add_class("card");
        assert_eq!(empty.get_str("class"), Some("card"));
    }

    #[test]
    fn test_attrs_macro() {
        let attrs = attrs! { cls: "x", "aria-label": "Close", checked: true, tabindex: 2 };
        assert_eq!(attrs.names(), vec!["class", "aria-label", "checked", "tabindex"]);
        assert_eq!(attrs.get("checked"), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.get("tabindex"), Some(&AttrValue::Int(2)));
    }
}

//! Icon sources
//!
//! Material icons are SVG documents looked up by name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ComponentError, ComponentResult};

/// Provider of SVG icon markup
pub trait IconSource: Send + Sync {
    /// Load the SVG markup for `name`
    fn load(&self, name: &str) -> ComponentResult<String>;
}

/// Icons stored as `<dir>/<name>.svg`
#[derive(Debug, Clone)]
pub struct IconDir {
    root: PathBuf,
}

impl IconDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IconSource for IconDir {
    fn load(&self, name: &str) -> ComponentResult<String> {
        let path = self.root.join(format!("{name}.svg"));
        let not_found = || ComponentError::IconNotFound {
            name: name.to_string(),
            location: path.display().to_string(),
        };

        // Names must stay inside the icon directory
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(not_found());
        }

        match std::fs::read_to_string(&path) {
            Ok(svg) => {
                tracing::trace!(icon = name, path = %path.display(), "loaded icon");
                Ok(svg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(not_found()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory icon set
#[derive(Debug, Clone, Default)]
pub struct MemoryIcons {
    icons: HashMap<String, String>,
}

impl MemoryIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(name.into(), svg.into());
    }

    pub fn with(mut self, name: impl Into<String>, svg: impl Into<String>) -> Self {
        self.insert(name, svg);
        self
    }
}

impl IconSource for MemoryIcons {
    fn load(&self, name: &str) -> ComponentResult<String> {
        self.icons
            .get(name)
            .cloned()
            .ok_or_else(|| ComponentError::IconNotFound {
                name: name.to_string(),
                location: "in-memory icon set".to_string(),
            })
    }
}

/// Source with no icons at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconSource for NoIcons {
    fn load(&self, name: &str) -> ComponentResult<String> {
        Err(ComponentError::IconNotFound {
            name: name.to_string(),
            location: "empty icon source".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_icons() {
        let icons = MemoryIcons::new().with("home", "<svg/>");
        assert_eq!(icons.load("home").unwrap(), "<svg/>");
        assert!(matches!(
            icons.load("away"),
            Err(ComponentError::IconNotFound { name, .. }) if name == "away"
        ));
    }

    #[test]
    fn test_no_icons() {
        assert!(NoIcons.load("home").is_err());
    }

    #[test]
    fn test_icon_dir_missing_file() {
        let dir = IconDir::new(std::env::temp_dir().join("ugui-no-such-icon-dir"));
        let err = dir.load("home").unwrap_err();
        assert!(matches!(err, ComponentError::IconNotFound { .. }));
        assert!(err.to_string().contains("home.svg"));
    }

    #[test]
    fn test_icon_dir_rejects_traversal() {
        let dir = IconDir::new(std::env::temp_dir());
        assert!(matches!(
            dir.load("../etc/passwd"),
            Err(ComponentError::IconNotFound { .. })
        ));
    }

    #[test]
    fn test_icon_dir_reads_svg() {
        let root = std::env::temp_dir().join(format!("ugui-icons-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("star.svg"), "<svg viewBox=\"0 0 24 24\"></svg>").unwrap();

        let svg = IconDir::new(&root).load("star").unwrap();
        assert!(svg.starts_with("<svg"));
        std::fs::remove_dir_all(&root).unwrap();
    }
}

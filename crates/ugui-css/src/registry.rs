//! CSS block store
//!
//! Blocks are compared by their trimmed text. Adding the same block twice is
//! a no-op, so every component can register its stylesheet unconditionally.

use std::collections::HashSet;

use crate::minify::{dedent, minify};
use crate::priority::rule_priority;

/// Set of distinct, trimmed CSS blocks
#[derive(Debug, Default, Clone)]
pub struct CssRegistry {
    blocks: HashSet<String>,
    stats: RegistryStats,
}

/// Counters for registry usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total `add` calls with non-empty text
    pub total: u64,
    /// Blocks stored
    pub unique: u64,
    /// Calls that hit an already stored block
    pub deduplicated: u64,
    /// Bytes of unique CSS stored
    pub bytes_stored: u64,
}

impl RegistryStats {
    /// Deduplication rate in percent
    pub fn dedup_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.deduplicated as f64 / self.total as f64 * 100.0
        }
    }
}

impl CssRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a CSS block. Returns `true` if the block was new.
    pub fn add(&mut self, css: &str) -> bool {
        let css = css.trim();
        if css.is_empty() {
            return false;
        }

        self.stats.total += 1;
        if self.blocks.contains(css) {
            self.stats.deduplicated += 1;
            return false;
        }

        tracing::trace!(bytes = css.len(), "registering css block");
        self.stats.unique += 1;
        self.stats.bytes_stored += css.len() as u64;
        self.blocks.insert(css.to_string())
    }

    /// Check whether an identical (trimmed) block is stored
    pub fn contains(&self, css: &str) -> bool {
        self.blocks.contains(css.trim())
    }

    /// Number of distinct blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Blocks in render order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted().into_iter()
    }

    /// Render all blocks.
    ///
    /// Blocks are ordered by [`rule_priority`] (highest first) and then
    /// lexicographically. In minified mode comments are stripped and
    /// whitespace runs collapse to a single space; otherwise each block is
    /// dedented and blocks are separated by a newline.
    pub fn render(&self, minify_output: bool) -> String {
        let blocks = self.sorted();
        if minify_output {
            let joined = blocks.join("\n");
            return minify(&joined);
        }

        blocks
            .into_iter()
            .map(dedent)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sorted(&self) -> Vec<&str> {
        let mut blocks: Vec<&str> = self.blocks.iter().map(String::as_str).collect();
        blocks.sort_by(|a, b| {
            rule_priority(b)
                .cmp(&rule_priority(a))
                .then_with(|| a.cmp(b))
        });
        blocks
    }
}

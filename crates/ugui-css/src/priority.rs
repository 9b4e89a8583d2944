//! Rule ordering
//!
//! Resets, custom properties and theme media queries must come before the
//! rules that consume them. A block's priority is decided by its leading
//! selector (or at-rule prelude).

use crate::minify::quoted_len;

/// Priority for blocks whose leading selector matches no table entry
pub const DEFAULT_PRIORITY: u8 = 10;

/// Leading-selector prefix to priority. Higher renders first; the first
/// matching prefix wins, so longer prefixes precede their shorter forms.
pub const PRIORITY_TABLE: &[(&str, u8)] = &[
    ("@charset", 100),
    ("@import", 95),
    (":root", 90),
    ("@media (prefers-color-scheme", 85),
    ("*", 80),
    ("html", 75),
    ("body", 70),
    ("@font-face", 65),
    ("@media", 60),
];

/// Priority of a CSS block
pub fn rule_priority(block: &str) -> u8 {
    let head = leading_selector(block);
    PRIORITY_TABLE
        .iter()
        .find(|(prefix, _)| matches_prefix(head, prefix))
        .map(|&(_, priority)| priority)
        .unwrap_or(DEFAULT_PRIORITY)
}

/// Text before the first `{` (or `;` for statement at-rules) outside a
/// quoted string, trimmed
fn leading_selector(block: &str) -> &str {
    let block = skip_comments(block.trim_start());
    let mut end = 0;
    while end < block.len() {
        let rest = &block[end..];
        if let Some(len) = quoted_len(rest) {
            end += len;
            continue;
        }
        let Some(c) = rest.chars().next() else {
            break;
        };
        if c == '{' || c == ';' {
            break;
        }
        end += c.len_utf8();
    }
    block[..end].trim()
}

/// Element selectors only match on a word boundary (`body` but not `bodyx`)
fn matches_prefix(head: &str, prefix: &str) -> bool {
    let Some(rest) = head.strip_prefix(prefix) else {
        return false;
    };
    if prefix.starts_with(|c: char| c.is_ascii_alphabetic()) {
        rest.chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    } else {
        true
    }
}

/// Drop comments ahead of the prelude. A quote ends the scan, so `/*`
/// inside a string is never taken for a comment.
fn skip_comments(mut text: &str) -> &str {
    while let Some(rest) = text.strip_prefix("/*") {
        match rest.find("*/") {
            Some(end) => text = rest[end + 2..].trim_start(),
            None => return "",
        }
    }
    text
}

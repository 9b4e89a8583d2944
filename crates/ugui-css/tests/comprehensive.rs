//! Comprehensive tests for ugui-css
//!
//! Registration, ordering and minification of collected page styles.

use ugui_css::{CssRegistry, DEFAULT_PRIORITY, rule_priority};

const ROOT_VARS: &str = ":root {\n    --color-primary: #0066cc;\n}";
const DARK_THEME: &str = "@media (prefers-color-scheme: dark) {\n    :root { --color-primary: #66b3ff; }\n}";
const RESET: &str = "* {\n    box-sizing: border-box;\n}";
const CARD: &str = ".card {\n    border: 1px solid var(--color-border);\n}";
const BUTTON: &str = ".btn {\n    background: var(--color-primary);\n}";

#[test]
fn test_same_block_rendered_once() {
    let mut registry = CssRegistry::new();
    registry.add(CARD);
    registry.add(&format!("\n\n   {CARD}   \n"));

    let output = registry.render(false);
    assert_eq!(output.matches(".card {").count(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_dedup_is_textual_not_semantic() {
    let mut registry = CssRegistry::new();
    registry.add(".a { color: red; }");
    registry.add(".a {color: red;}");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_priority_order() {
    let mut registry = CssRegistry::new();
    registry.add(BUTTON);
    registry.add(CARD);
    registry.add(RESET);
    registry.add(DARK_THEME);
    registry.add(ROOT_VARS);

    let order: Vec<&str> = registry.iter().collect();
    assert_eq!(order, vec![ROOT_VARS, DARK_THEME, RESET, BUTTON, CARD]);
}

#[test]
fn test_order_independent_of_insertion() {
    let mut forward = CssRegistry::new();
    let mut backward = CssRegistry::new();
    let blocks = [ROOT_VARS, DARK_THEME, RESET, CARD, BUTTON];

    for block in blocks {
        forward.add(block);
    }
    for block in blocks.iter().rev() {
        backward.add(block);
    }

    assert_eq!(forward.render(false), backward.render(false));
    assert_eq!(forward.render(true), backward.render(true));
}

#[test]
fn test_render_is_deterministic() {
    let mut registry = CssRegistry::new();
    registry.add(CARD);
    registry.add(BUTTON);

    assert_eq!(registry.render(true), registry.render(true));
    assert_eq!(registry.render(false), registry.render(false));
}

#[test]
fn test_minified_render() {
    let mut registry = CssRegistry::new();
    registry.add(".btn {\n    cursor: pointer;  /* always */\n}");
    registry.add(ROOT_VARS);

    assert_eq!(
        registry.render(true),
        ":root { --color-primary: #0066cc; } .btn { cursor: pointer; }"
    );
}

#[test]
fn test_pretty_render_dedents_blocks() {
    let mut registry = CssRegistry::new();
    registry.add(
        r#"
        .hero {
            text-align: center;
        }
        "#,
    );

    assert_eq!(registry.render(false), ".hero {\n    text-align: center;\n}");
}

#[test]
fn test_empty_registry_renders_nothing() {
    let registry = CssRegistry::new();
    assert_eq!(registry.render(true), "");
    assert_eq!(registry.render(false), "");
}

#[test]
fn test_priority_of_unknown_rules() {
    assert_eq!(rule_priority("[data-tooltip] { position: relative; }"), DEFAULT_PRIORITY);
}

#[test]
fn test_minified_render_keeps_quoted_comment_markers() {
    let mut registry = CssRegistry::new();
    registry.add(".q::before {\n    content: \"/* hi */\";\n}\n/* note */");
    registry.add(".bg { background: url('a/*b.png'); }");

    let output = registry.render(true);
    assert!(output.contains(r#"content: "/* hi */";"#));
    assert!(output.contains("url('a/*b.png')"));
    assert!(!output.contains("note"));
}

//! Tag name tables
//!
//! Validation is advisory: unknown and deprecated tags are logged, never
//! rejected.

/// Void elements (self-closing, no end tag)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Non-void elements the builder knows about
pub const KNOWN_TAGS: &[&str] = &[
    // Document and metadata
    "html", "head", "style", "title", "body",
    // Sectioning
    "address", "article", "aside", "footer", "header", "h1", "h2", "h3", "h4", "h5", "h6",
    "hgroup", "main", "nav", "section", "search",
    // Text content
    "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure", "li", "menu", "ol", "p",
    "pre", "ul",
    // Inline text
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark",
    "q", "rp", "rt", "rtc", "ruby", "s", "samp", "small", "span", "strong", "sub", "sup",
    "time", "u", "var",
    // Media and embedded
    "audio", "canvas", "iframe", "map", "object", "picture", "svg", "video",
    // Scripting
    "noscript", "script",
    // Edits
    "del", "ins",
    // Tables
    "caption", "colgroup", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
    // Forms
    "button", "datalist", "fieldset", "form", "label", "legend", "meter", "optgroup", "option",
    "output", "progress", "select", "textarea",
    // Interactive and components
    "details", "dialog", "summary", "slot", "template",
];

/// Obsolete elements that still render but should not be used
pub const DEPRECATED_TAGS: &[&str] = &[
    "acronym", "applet", "basefont", "bgsound", "big", "blink", "center", "command", "content",
    "dir", "element", "font", "frame", "frameset", "image", "isindex", "keygen", "listing",
    "marquee", "menuitem", "multicol", "nextid", "nobr", "noembed", "noframes", "plaintext",
    "shadow", "spacer", "strike", "tt", "xmp",
];

/// Classification of a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    Known,
    Void,
    Deprecated,
    /// Autonomous custom element (`my-widget`)
    Custom,
    Unknown,
}

/// Normalize a builder-side tag name: raw identifier prefix and one leading
/// underscore are dropped, the rest is lowercased.
pub fn normalize_tag_name(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let name = name.strip_prefix('_').unwrap_or(name);
    name.to_ascii_lowercase()
}

/// Whether `tag` is a void element
#[inline]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Classify a normalized tag name
pub fn tag_status(tag: &str) -> TagStatus {
    if is_void(tag) {
        TagStatus::Void
    } else if KNOWN_TAGS.contains(&tag) {
        TagStatus::Known
    } else if DEPRECATED_TAGS.contains(&tag) {
        TagStatus::Deprecated
    } else if is_custom_element_name(tag) {
        TagStatus::Custom
    } else {
        TagStatus::Unknown
    }
}

/// Log a warning for deprecated or unknown tags
pub(crate) fn check_tag(tag: &str) -> TagStatus {
    let status = tag_status(tag);
    match status {
        TagStatus::Deprecated => tracing::warn!(
            tag,
            "the <{tag}> tag is deprecated, see https://developer.mozilla.org/en-US/docs/Web/HTML/Element"
        ),
        TagStatus::Unknown => tracing::warn!(tag, "unknown tag <{tag}>"),
        _ => {}
    }
    status
}

fn is_custom_element_name(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_lowercase())
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
}

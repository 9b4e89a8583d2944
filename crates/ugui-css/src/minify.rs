//! CSS text transforms

/// Strip `/* ... */` comments and collapse whitespace runs to one space.
///
/// Quoted strings are copied through untouched. An unterminated comment
/// swallows the rest of the input, as a browser would.
pub fn minify(css: &str) -> String {
    let mut output = String::with_capacity(css.len());
    let mut rest = css;
    let mut pending_space = false;

    while !rest.is_empty() {
        if let Some(len) = quoted_len(rest) {
            if pending_space && !output.is_empty() {
                output.push(' ');
            }
            pending_space = false;
            output.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        if let Some(after) = rest.strip_prefix("/*") {
            rest = match after.find("*/") {
                Some(end) => &after[end + 2..],
                None => "",
            };
            continue;
        }

        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            break;
        };
        rest = chars.as_str();

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !output.is_empty() {
            output.push(' ');
        }
        pending_space = false;
        output.push(c);
    }

    output
}

/// Byte length of the string literal `text` starts with, quotes included.
///
/// Backslash escapes are honoured; an unterminated string runs to the end.
pub(crate) fn quoted_len(text: &str) -> Option<usize> {
    let quote = text.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(i + c.len_utf8());
        }
    }
    Some(text.len())
}

/// Remove the indentation shared by every line after the first.
///
/// Blocks are stored trimmed, so the first line never carries indentation
/// while continuation lines keep whatever the source literal had. Blank lines
/// are dropped and trailing whitespace is removed.
pub fn dedent(block: &str) -> String {
    let mut lines = block.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };

    let rest: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
    let common = rest
        .iter()
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut output = first.trim_end().to_string();
    for line in rest {
        output.push('\n');
        output.push_str(line[common..].trim_end());
    }
    output
}

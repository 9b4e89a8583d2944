//! HTML escaping

/// Escape text content, appending to `output`
pub fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape a double-quoted attribute value, appending to `output`
pub fn escape_attribute(value: &str, output: &mut String) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_keeps_quotes() {
        let mut output = String::new();
        escape_text("a < b && \"c\"", &mut output);
        assert_eq!(output, "a &lt; b &amp;&amp; \"c\"");
    }

    #[test]
    fn test_escape_attribute() {
        let mut output = String::new();
        escape_attribute("say \"hi\" <now>", &mut output);
        assert_eq!(output, "say &quot;hi&quot; &lt;now&gt;");
    }
}

//! Text helpers shared by the highlighter and the page templates

/// Escape the characters that are significant inside HTML text and
/// double-quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    push_escaped(&mut out, text);
    out
}

/// Append `text` to `out`, HTML-escaped
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Final path component of a slash-separated name, as displayed in titles.
///
/// Header values such as `SourceFile: src/cmd/main.go` are free text, so this
/// accepts either separator regardless of platform.
pub fn file_base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches(['/', '\\']);
    match trimmed.rfind(['/', '\\']) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_file_base_name() {
        assert_eq!(file_base_name("src/cmd/main.go"), "main.go");
        assert_eq!(file_base_name("Makefile"), "Makefile");
        assert_eq!(file_base_name(r"lib\util.py"), "util.py");
        assert_eq!(file_base_name("dir/"), "dir");
    }
}

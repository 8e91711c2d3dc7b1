//! Whitespace normalization for text values.

/// Rewrites `\r\n`, `\n\r`, `\r` and `\n` as a single `\n` each.
pub fn normalize_line_breaks(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\n' => {
                chars.next_if_eq(&'\r');
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Normalizes line breaks, then folds every run of other whitespace into a
/// single space. Line breaks are kept.
pub fn normalize_text(s: &str) -> String {
    let s = normalize_line_breaks(s);
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c != '\n' && c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Like [`normalize_text`], with line breaks turned into spaces.
pub fn normalize_simple_text(s: &str) -> String {
    normalize_text(s).replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_variants() {
        assert_eq!(normalize_line_breaks("a\r\nb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\n\rb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\rb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\nb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\n\nb"), "a\n\nb");
        assert_eq!(normalize_line_breaks("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_text_keeps_line_breaks() {
        assert_eq!(normalize_text("first\r\nsecond"), "first\nsecond");
        assert_eq!(normalize_text("a \t\x0b b"), "a b");
        assert_eq!(normalize_text("a\n\n b"), "a\n\n b");
    }

    #[test]
    fn test_simple_text_folds_line_breaks() {
        assert_eq!(normalize_simple_text("Black\r\nwins"), "Black wins");
        assert_eq!(normalize_simple_text("a\t\tb"), "a b");
        assert_eq!(normalize_simple_text(""), "");
    }
}

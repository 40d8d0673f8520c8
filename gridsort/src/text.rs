//! Visible-text extraction from cell content.

/// Returns the visible text of a cell value with leading and trailing
/// whitespace removed. Empty input yields the empty string.
pub fn visible_text(raw: &str) -> &str {
    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(visible_text("  hello  "), "hello");
        assert_eq!(visible_text("\t42\n"), "42");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(visible_text(""), "");
        assert_eq!(visible_text("   "), "");
    }
}

// Output formatting — terminal rendering of reports and theme listings.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." when
/// something was cut. Counts characters, not bytes, so multi-byte text never
/// panics a slice.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_chars("theme", 10), "theme");
    }

    #[test]
    fn long_strings_are_cut_with_ellipsis() {
        assert_eq!(truncate_chars("abcdefgh", 4), "abcd...");
    }

    #[test]
    fn multibyte_text_is_safe() {
        let text = "émotion única";
        assert_eq!(truncate_chars(text, 3), "émo...");
    }
}

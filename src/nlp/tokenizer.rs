//! Word-level tokenization
//!
//! Splits text into maximal runs of alphanumeric characters. Every
//! non-alphanumeric character (whitespace, punctuation, symbols, emoji)
//! is a split point and never appears in a token, so the downstream
//! filter "token consists entirely of alphanumeric characters" holds by
//! construction. Unicode letters and digits count as alphanumeric, same
//! as `str.isalnum()` in the data the model was prepared with.

/// Iterate over word tokens in `text`.
///
/// Tokens are yielded in input order and borrow from the input; the
/// iterator never fails and yields nothing for empty or symbol-only
/// input.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator returned by [`tokenize`].
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // Skip the separator run
        let start = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_alphanumeric())
            .map(|(i, _)| i)?;
        let rest = &self.rest[start..];

        // Take the alphanumeric run
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_alphanumeric())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        self.rest = &rest[end..];
        Some(&rest[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(collect("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_is_split_point() {
        assert_eq!(
            collect("http://bit.ly/xyz"),
            vec!["http", "bit", "ly", "xyz"]
        );
        assert_eq!(collect("don't panic!"), vec!["don", "t", "panic"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert!(collect("").is_empty());
        assert!(collect("   \t\n").is_empty());
        assert!(collect("!!! ??? ...").is_empty());
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(collect("order #1234 shipped"), vec!["order", "1234", "shipped"]);
    }

    #[test]
    fn test_unicode_letters_kept_emoji_dropped() {
        assert_eq!(collect("déjà 💰 vu"), vec!["déjà", "vu"]);
        assert_eq!(collect("naïve café"), vec!["naïve", "café"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(collect("...urgent..."), vec!["urgent"]);
    }
}

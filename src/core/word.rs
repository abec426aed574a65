//! Word normalization helpers
//!
//! Player input and list entries go through the same normalization so that
//! comparisons are case- and whitespace-insensitive.

/// Root word used when no word list yields a usable entry
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Shortest word that can score
pub const MIN_WORD_LENGTH: usize = 3;

/// Trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Length of a word in letters, which is also its score
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("SILK"), "silk");
        assert_eq!(normalize("SiLk"), "silk");
    }

    #[test]
    fn normalize_trims_whitespace_and_newlines() {
        assert_eq!(normalize("\t worm \r\n"), "worm");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" silk worm "), "silk worm");
    }

    #[test]
    fn letter_count_counts_chars_not_bytes() {
        assert_eq!(letter_count("silk"), 4);
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn default_root_is_normalized() {
        assert_eq!(normalize(DEFAULT_ROOT_WORD), DEFAULT_ROOT_WORD);
        assert!(letter_count(DEFAULT_ROOT_WORD) >= MIN_WORD_LENGTH);
    }
}

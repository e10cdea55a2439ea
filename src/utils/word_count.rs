//! Substring occurrence counting.

/// Counts non-overlapping occurrences of `word` in `text`.
///
/// The scan runs left to right and each match consumes its characters, so
/// `"aaaa"` contains `"aa"` twice, not three times.
///
/// An empty `word` matches at every character boundary, giving
/// `text.chars().count() + 1`.
///
/// # Examples
///
/// ```
/// use ws_utils::utils::count_word;
///
/// assert_eq!(count_word("robot robot robot", "robot"), 3);
/// assert_eq!(count_word("aaaa", "aa"), 2);
/// assert_eq!(count_word("abc", ""), 4);
/// ```
pub fn count_word(text: &str, word: &str) -> usize {
    text.matches(word).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_word() {
        assert_eq!(count_word("robot robot robot", "robot"), 3);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        assert_eq!(count_word("aaaa", "aa"), 2);
        assert_eq!(count_word("aaa", "aa"), 1);
        assert_eq!(count_word("abababa", "aba"), 2);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(count_word("hello world", "rust"), 0);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(count_word("Robot robot ROBOT", "robot"), 1);
    }

    #[test]
    fn test_substring_inside_words() {
        assert_eq!(count_word("robots and robotics", "robot"), 2);
    }

    #[test]
    fn test_word_longer_than_text() {
        assert_eq!(count_word("ro", "robot"), 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(count_word("", "robot"), 0);
    }

    #[test]
    fn test_empty_word_counts_character_boundaries() {
        assert_eq!(count_word("", ""), 1);
        assert_eq!(count_word("abc", ""), 4);
        assert_eq!(count_word("héllo", ""), 6);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(count_word("ünïcödé ünïcödé", "ünï"), 2);
    }
}

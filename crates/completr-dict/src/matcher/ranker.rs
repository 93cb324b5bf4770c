// Ranking: shorter suggestions first

use completr_core::suggestion::Suggestion;

/// Order suggestions by display length, shortest first.
///
/// The sort is stable, so suggestions of equal length keep their scan order.
pub fn rank(suggestions: &mut [Suggestion]) {
    suggestions.sort_by_cached_key(Suggestion::display_len);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.display_text.as_str()).collect()
    }

    #[test]
    fn shorter_first() {
        let mut s = vec![Suggestion::from_text("application"), Suggestion::from_text("apple")];
        rank(&mut s);
        assert_eq!(texts(&s), ["apple", "application"]);
    }

    #[test]
    fn ties_keep_scan_order() {
        let mut s = vec![
            Suggestion::from_text("bbb"),
            Suggestion::from_text("a"),
            Suggestion::from_text("aaa"),
            Suggestion::from_text("ccc"),
        ];
        rank(&mut s);
        assert_eq!(texts(&s), ["a", "bbb", "aaa", "ccc"]);
    }

    #[test]
    fn length_is_measured_in_chars() {
        // Four characters but five bytes.
        let mut s = vec![Suggestion::from_text("abcde"), Suggestion::from_text("caf\u{00E9}")];
        rank(&mut s);
        assert_eq!(texts(&s), ["caf\u{00E9}", "abcde"]);
    }

    #[test]
    fn empty_list() {
        let mut s: Vec<Suggestion> = Vec::new();
        rank(&mut s);
        assert!(s.is_empty());
    }
}

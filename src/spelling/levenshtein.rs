//! Levenshtein distance calculation for spelling suggestions.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
///
/// Characters are compared after lowercasing, so `"Hello"` and `"hello"` are at distance 0.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().flat_map(char::to_lowercase).collect();
    let s2_chars: Vec<char> = s2.chars().flat_map(char::to_lowercase).collect();
    distance_chars(&s1_chars, &s2_chars)
}

/// Full-table edit distance over two already-normalized character slices.
#[allow(clippy::needless_range_loop)]
fn distance_chars(s1_chars: &[char], s2_chars: &[char]) -> usize {
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // table[i][j] holds the edits needed to turn s1[..i] into s2[..j]
    let mut table = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        table[i][0] = i;
    }
    for j in 0..=len2 {
        table[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            table[i][j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        table[i - 1][j], // deletion
                        table[i][j - 1], // insertion
                    ),
                    table[i - 1][j - 1], // substitution
                )
            };
        }
    }

    table[len1][len2]
}

/// Distance calculator bound to a single query.
///
/// The query is lowercased and split into characters once, so scoring it
/// against a whole dictionary only decodes each candidate.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        let query = query.to_lowercase();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the normalized query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().flat_map(char::to_lowercase).collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition costs two
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_distance_ignores_case() {
        assert_eq!(levenshtein_distance("Hello", "hello"), 0);
        assert_eq!(levenshtein_distance("HELLO", "help"), 2);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("", "abc"),
            ("apple", "xyz"),
            ("cot", "cat"),
            ("intention", "execution"),
        ];

        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for word in ["", "a", "spelling", "naïve"] {
            assert_eq!(levenshtein_distance(word, word), 0);
        }
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("naïve", "naive"), 1);
    }

    #[test]
    fn test_levenshtein_matcher() {
        let matcher = LevenshteinMatcher::new("Search");

        assert_eq!(matcher.query(), "search");
        assert_eq!(matcher.distance("search"), 0);
        assert_eq!(matcher.distance("SEARCH"), 0);
        assert_eq!(matcher.distance("serach"), 2);
        assert_eq!(
            matcher.distance("research"),
            levenshtein_distance("search", "research")
        );
    }
}

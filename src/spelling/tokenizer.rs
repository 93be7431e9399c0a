//! Splits lines of prose into checkable words.
//!
//! ASCII letters, digits, `-` and `'` form words; anything else is a
//! boundary. Letters are lowercased, and a token must contain at least one
//! letter to be kept, so `"--"` or `"42"` never reach the checker.
//! Possessive endings are trimmed: `jay's` becomes `jay`, `players'`
//! becomes `players`.

/// Tokenize one line of text.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in line.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '\'' {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            push_token(&mut tokens, &current);
            current.clear();
        }
    }
    push_token(&mut tokens, &current);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let word = strip_possessive(raw);
    if is_word(word) {
        tokens.push(word.to_string());
    }
}

/// Whether a token looks like a word at all.
fn is_word(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_alphabetic())
}

fn strip_possessive(word: &str) -> &str {
    let word = word.strip_suffix("'s").unwrap_or(word);
    word.strip_suffix('\'').unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        assert_eq!(tokenize("this is a test"), vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(
            tokenize("a hyphen-ated word that's life::monkey"),
            vec!["a", "hyphen-ated", "word", "that", "life", "monkey"]
        );
    }

    #[test]
    fn test_casing() {
        assert_eq!(tokenize("A Bad Deal"), vec!["a", "bad", "deal"]);
    }

    #[test]
    fn test_non_words_are_dropped() {
        assert_eq!(tokenize("-- 1 42 x2"), vec!["x2"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_bare_possessive_is_dropped() {
        assert_eq!(tokenize("the dog 's -'s"), vec!["the", "dog"]);
        assert_eq!(tokenize("'s"), Vec::<String>::new());
        assert_eq!(tokenize("x's '"), vec!["x"]);
    }

    #[test]
    fn test_strip_possessive() {
        assert_eq!(strip_possessive("jay's"), "jay");
        assert_eq!(strip_possessive("players'"), "players");
        assert_eq!(strip_possessive("ja'y"), "ja'y");
    }

    #[test]
    fn test_non_ascii_is_a_boundary() {
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }
}

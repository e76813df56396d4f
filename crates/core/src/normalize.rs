use regex::Regex;

use crate::stem::stem;

/// Turn raw input text into the lowercase stemmed token sequence the matcher
/// scores against. Splits on whitespace and on `, ; ? ! . -` (each optionally
/// followed by trailing whitespace).
pub fn normalize(input: &str) -> Vec<String> {
    let splitter = Regex::new(r"\s+|[,;?!.-]\s*").expect("valid splitter regex");

    splitter
        .split(&input.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(stem)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(normalize("Hello, WORLD!"), vec!["hello", "world"]);
        assert_eq!(normalize("well-known fact."), vec!["well", "known", "fact"]);
    }

    #[test]
    fn stems_each_token() {
        assert_eq!(normalize("saving loans"), vec!["save", "loan"]);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t  ").is_empty());
        assert!(normalize("?!.,;").is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(normalize("Hello!"), normalize("Hello!"));
    }
}

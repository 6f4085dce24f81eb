use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Synthetic word boundary inserted by the case-boundary passes.
const BOUNDARY: char = '\u{1f}';

lazy_static! {
    // lowercase or digit followed by uppercase: "userId" -> "user|Id"
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    // acronym followed by a capitalized word: "XMLParser" -> "XML|Parser"
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\s_.\-\x1f]+").unwrap();
}

fn mark_boundary<'t>(re: &Regex, text: &'t str) -> Cow<'t, str> {
    re.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], BOUNDARY, &caps[2])
    })
}

/// Split `input` into lowercase words.
///
/// Explicit separators (whitespace, `_`, `-`, `.`) and case transitions both
/// end a word. Runs of capitals stay together as one acronym, and digits stick
/// to the word they touch:
///
/// ```
/// use caseconv::case::tokenize;
///
/// assert_eq!(tokenize("XMLHttpRequest"), vec!["xml", "http", "request"]);
/// assert_eq!(tokenize("user123Id"), vec!["user123", "id"]);
/// assert_eq!(tokenize(" __-- "), Vec::<String>::new());
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let cased = mark_boundary(&CASE_BOUNDARY, trimmed);
    let marked = mark_boundary(&ACRONYM_BOUNDARY, &cased);
    tracing::trace!(input = trimmed, marked = %marked.escape_debug(), "inserted case boundaries");

    let tokens: Vec<String> = SEPARATORS
        .split(&marked)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_lowercase)
        .collect();

    tracing::trace!(?tokens, "tokenized");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_splitting() {
        assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
        assert_eq!(tokenize("snake_case"), vec!["snake", "case"]);
        assert_eq!(tokenize("kebab-case"), vec!["kebab", "case"]);
        assert_eq!(tokenize("dot.case"), vec!["dot", "case"]);
    }

    #[test]
    fn test_compound_splitting() {
        assert_eq!(tokenize("camelCaseWord"), vec!["camel", "case", "word"]);
        assert_eq!(tokenize("PascalCase"), vec!["pascal", "case"]);
        assert_eq!(tokenize("myComponentName"), vec!["my", "component", "name"]);
    }

    #[test]
    fn test_acronyms_stay_whole() {
        assert_eq!(tokenize("XMLParser"), vec!["xml", "parser"]);
        assert_eq!(tokenize("XMLHttpRequest"), vec!["xml", "http", "request"]);
        assert_eq!(tokenize("parseHTML"), vec!["parse", "html"]);
        assert_eq!(tokenize("SCREEN_NAME"), vec!["screen", "name"]);
    }

    #[test]
    fn test_digits_attach_to_words() {
        assert_eq!(tokenize("user123Id"), vec!["user123", "id"]);
        assert_eq!(tokenize("version2Update"), vec!["version2", "update"]);
        assert_eq!(tokenize("user_id_123"), vec!["user", "id", "123"]);
        assert_eq!(tokenize("mobile_number-123"), vec!["mobile", "number", "123"]);
    }

    #[test]
    fn test_runs_of_mixed_separators_collapse() {
        assert_eq!(tokenize("multiple___separators"), vec!["multiple", "separators"]);
        assert_eq!(
            tokenize("mix.of-all_separators here"),
            vec!["mix", "of", "all", "separators", "here"]
        );
        assert_eq!(tokenize("___leading_underscores"), vec!["leading", "underscores"]);
        assert_eq!(tokenize("trailing_underscores___"), vec!["trailing", "underscores"]);
        assert_eq!(tokenize("   trim   spaces   "), vec!["trim", "spaces"]);
    }

    #[test]
    fn test_empty_and_separator_only() {
        for input in ["", "   ", "___", "---", "...", " _-. ", "\t\n"] {
            assert!(tokenize(input).is_empty(), "{input:?} should yield no tokens");
        }
    }

    #[test]
    fn test_boundary_marker_in_input_is_a_separator() {
        assert_eq!(tokenize("a\u{1f}b"), vec!["a", "b"]);
        assert!(tokenize("\u{1f}\u{1f}").is_empty());
    }

    #[test]
    fn test_tokens_are_never_empty() {
        for input in ["-a-", "a--b", "A_B_C", "x.Y.z", "__Init__"] {
            assert!(tokenize(input).iter().all(|t| !t.is_empty()));
        }
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"\W+").expect("valid regex");
}

/// Split text on runs of non-word characters.
///
/// Word characters are Unicode letters, digits, marks and `_`. Leading and
/// trailing separators would yield empty tokens; those are dropped, so an
/// empty or all-punctuation input produces no tokens at all. Case is left
/// untouched.
pub fn tokenize(text: &str) -> Vec<&str> {
    SEPARATOR.split(text).filter(|t| !t.is_empty()).collect()
}

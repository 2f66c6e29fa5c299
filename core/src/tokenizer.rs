use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W").expect("valid regex");
}

/// Split one line of a document into raw tokens: lowercase, trim the line, split on single spaces.
///
/// Runs of spaces would yield empty tokens; those are skipped.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.to_lowercase()
        .trim()
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// True if the token contains any character outside letters, digits and underscore.
pub fn has_non_word(token: &str) -> bool {
    NON_WORD.is_match(token)
}

/// Remove every non-word character from the token.
pub fn strip_non_word(token: &str) -> String {
    NON_WORD.replace_all(token, "").into_owned()
}

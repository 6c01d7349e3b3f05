//! Index pattern text rules: validation and editing.

use thiserror::Error;

/// Characters Elasticsearch does not allow in an index name.
pub const ILLEGAL_CHARACTERS: &[char] = &['\\', '/', '?', '"', '<', '>', '|', ' '];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("An index pattern is required.")]
    Empty,
    #[error("Spaces and the characters \\ / ? \" < > | are not allowed.")]
    IllegalCharacters,
}

/// Check that `query` can be used as an index pattern.
pub fn validate_pattern(query: &str) -> Result<(), PatternError> {
    if query.is_empty() {
        return Err(PatternError::Empty);
    }
    if query.contains(ILLEGAL_CHARACTERS) {
        return Err(PatternError::IllegalCharacters);
    }
    Ok(())
}

/// True when `c` typed into an empty field should get a trailing `*`.
fn can_append_wildcard(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Insert `c` at `cursor` (a char offset). Returns the new text and cursor.
///
/// The first letter or digit typed into an empty field becomes `c*` with the
/// cursor before the wildcard, so the query starts as a prefix match.
pub fn insert_char(text: &str, cursor: usize, c: char) -> (String, usize) {
    if text.is_empty() && can_append_wildcard(c) {
        return (format!("{c}*"), 1);
    }
    let mut out = text.to_string();
    out.insert(byte_offset(text, cursor), c);
    (out, cursor + 1)
}

/// Delete the char before `cursor`.
pub fn backspace(text: &str, cursor: usize) -> (String, usize) {
    if cursor == 0 {
        return (text.to_string(), 0);
    }
    let mut out = text.to_string();
    out.remove(byte_offset(text, cursor - 1));
    (out, cursor - 1)
}

/// Delete the char at `cursor`.
pub fn delete(text: &str, cursor: usize) -> (String, usize) {
    if cursor >= text.chars().count() {
        return (text.to_string(), cursor);
    }
    let mut out = text.to_string();
    out.remove(byte_offset(text, cursor));
    (out, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pattern() {
        assert_eq!(validate_pattern(""), Err(PatternError::Empty));
        assert_eq!(validate_pattern("logs *"), Err(PatternError::IllegalCharacters));
        for bad in ["a\\b", "a/b", "a?b", "a\"b", "a<b", "a>b", "a|b"] {
            assert_eq!(validate_pattern(bad), Err(PatternError::IllegalCharacters), "{bad}");
        }
        assert!(validate_pattern("logs-*").is_ok());
        assert!(validate_pattern("remote:logs-*,metrics-*").is_ok());
    }

    #[test]
    fn test_first_letter_appends_wildcard() {
        assert_eq!(insert_char("", 0, 'l'), ("l*".to_string(), 1));
        assert_eq!(insert_char("", 0, '7'), ("7*".to_string(), 1));
    }

    #[test]
    fn test_first_wildcard_or_symbol_is_kept_as_is() {
        assert_eq!(insert_char("", 0, '*'), ("*".to_string(), 1));
        assert_eq!(insert_char("", 0, '.'), (".".to_string(), 1));
    }

    #[test]
    fn test_insert_before_wildcard() {
        let (text, cursor) = insert_char("l*", 1, 'o');
        assert_eq!(text, "lo*");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        assert_eq!(backspace("lo*", 2), ("l*".to_string(), 1));
        assert_eq!(backspace("lo*", 0), ("lo*".to_string(), 0));
        assert_eq!(delete("lo*", 2), ("lo".to_string(), 2));
        assert_eq!(delete("lo", 2), ("lo".to_string(), 2));
    }

    #[test]
    fn test_multibyte_editing() {
        let (text, cursor) = insert_char("日*", 1, '志');
        assert_eq!(text, "日志*");
        assert_eq!(backspace(&text, cursor), ("日*".to_string(), 1));
    }
}

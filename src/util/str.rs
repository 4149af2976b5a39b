//! Small ASCII string helpers used by the tokenizer and tree builder.

/// If `c` is an ASCII letter, return the corresponding lowercase letter.
pub fn lower_ascii_letter(c: char) -> Option<char> {
    match c {
        'a'..='z' => Some(c),
        'A'..='Z' => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Map ASCII uppercase to lowercase; preserve other characters.
pub fn lower_ascii(c: char) -> char {
    lower_ascii_letter(c).unwrap_or(c)
}

/// Is the character an ASCII alphanumeric character?
pub fn is_ascii_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii_letters_only() {
        assert_eq!(lower_ascii_letter('a'), Some('a'));
        assert_eq!(lower_ascii_letter('A'), Some('a'));
        assert_eq!(lower_ascii_letter('!'), None);
        assert_eq!(lower_ascii_letter('\u{a66e}'), None);
    }

    #[test]
    fn is_ascii_alnum_rejects_symbols_and_non_ascii() {
        assert!(is_ascii_alnum('a'));
        assert!(is_ascii_alnum('1'));
        assert!(!is_ascii_alnum('!'));
        assert!(!is_ascii_alnum('\u{a66e}'));
    }
}

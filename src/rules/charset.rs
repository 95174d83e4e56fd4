//! Character class rules - uppercase, lowercase, digits, special characters.
//!
//! Classes are ASCII ranges; accented letters and non-ASCII digits match
//! none of them.

/// The fixed set of characters accepted by the `special` rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks if the password contains at least one `A`-`Z` character.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks if the password contains at least one `a`-`z` character.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks if the password contains at least one `0`-`9` character.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uppercase() {
        assert!(!has_uppercase("lowercase123!"));
        assert!(has_uppercase("Lowercase123!"));
    }

    #[test]
    fn test_missing_lowercase() {
        assert!(!has_lowercase("UPPERCASE123!"));
        assert!(has_lowercase("uPPERCASE123!"));
    }

    #[test]
    fn test_missing_digit() {
        assert!(!has_digit("NoNumbers!"));
        assert!(has_digit("N0Numbers!"));
    }

    #[test]
    fn test_missing_special() {
        assert!(!has_special("NoSpecial123"));
        assert!(has_special("NoSpecial123!"));
    }

    #[test]
    fn test_special_set_is_exact() {
        // Space and underscore are not in the accepted set
        assert!(!has_special("a b_c"));
        for c in SPECIAL_CHARS.chars() {
            assert!(has_special(&c.to_string()));
        }
    }

    #[test]
    fn test_non_ascii_matches_no_class() {
        assert!(!has_uppercase("Ä"));
        assert!(!has_lowercase("ß"));
        assert!(!has_digit("٣"));
        assert!(!has_special("§"));
    }
}

//! Length rules - minimum length and the long-password bonus.

use secrecy::{ExposeSecret, SecretString};
use super::{BONUS_LENGTH, MIN_LENGTH};

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in characters, not bytes, so multi-byte input is not
/// over-counted.
pub fn has_min_length(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

/// Checks if the password qualifies for the [`BONUS_LENGTH`] bonus point.
pub fn has_length_bonus(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= BONUS_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert!(!has_min_length(&pwd));
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(has_min_length(&pwd));
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // Seven characters, more than eight bytes.
        let pwd = SecretString::new("pässwör".to_string().into());
        assert!(!has_min_length(&pwd));
    }

    #[test]
    fn test_length_bonus_below_threshold() {
        let pwd = SecretString::new("elevenchars".to_string().into());
        assert!(!has_length_bonus(&pwd));
    }

    #[test]
    fn test_length_bonus_at_threshold() {
        let pwd = SecretString::new("twelve chars".to_string().into());
        assert!(has_length_bonus(&pwd));
    }
}

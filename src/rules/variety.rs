//! Character variety rules - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains at least one uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// Checks if the password contains at least one lowercase letter.
pub fn has_lowercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// Checks if the password contains at least one ASCII digit.
pub fn has_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains at least one character outside letters
/// and digits.
pub fn has_special(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| !c.is_alphanumeric())
}

//! Length rules - minimum required and maximum allowed password length.

/// Minimum number of characters for the `length` rule to pass.
pub const MIN_LENGTH: usize = 8;

/// Maximum number of characters before a password is rejected outright.
pub const MAX_LENGTH: usize = 10;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes, so accented input is not
/// penalized for its UTF-8 encoding width.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// Checks if the password stays within the maximum allowed length.
pub fn within_max_length(password: &str) -> bool {
    password.chars().count() <= MAX_LENGTH
}

//! Credential validation
//!
//! Pure, deterministic checks applied to registration and login input
//! before any storage or hashing work happens. Rules run in a fixed order
//! (presence, then email format, then password strength) and the first
//! violated rule is the one reported.

use crate::errors::ValidationError;

/// Characters that satisfy the password special-character requirement.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&#";

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Check email format: single `@`, non-whitespace local part, domain and TLD.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    email_regex.is_match(email)
}

/// Check password strength.
///
/// A strong password is at least 8 characters, contains at least one ASCII
/// lowercase letter, one uppercase letter, one digit, and one character from
/// [`PASSWORD_SPECIAL_CHARS`], and uses no characters outside that alphabet.
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return false;
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        match c {
            'a'..='z' => has_lower = true,
            'A'..='Z' => has_upper = true,
            '0'..='9' => has_digit = true,
            c if PASSWORD_SPECIAL_CHARS.contains(c) => has_special = true,
            // Anything outside the allowed alphabet disqualifies the password
            _ => return false,
        }
    }

    has_lower && has_upper && has_digit && has_special
}

/// Validate registration fields.
///
/// Order: presence of all fields, email format, password strength.
pub fn validate_registration(
    email: &str,
    username: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    if !is_strong_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// Validate login fields.
///
/// Only presence is checked here; credential correctness is judged against
/// the user directory afterwards.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com", true)]
    #[case("user.name@domain.co.uk", true)]
    #[case("", false)]
    #[case("invalid", false)]
    #[case("no@dot", false)]
    #[case("two@@example.com", false)]
    #[case("spaces in@email.com", false)]
    #[case("trailing@example.com ", false)]
    fn test_email_format(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected, "email: {:?}", email);
    }

    #[rstest]
    #[case("Password@123", true)]
    #[case("Aa1@Aa1@", true)]
    #[case("short", false)]
    #[case("alllowercase1@", false)]
    #[case("ALLUPPERCASE1@", false)]
    #[case("NoDigits@@", false)]
    #[case("NoSpecial123", false)]
    #[case("Has Space@123", false)]
    #[case("Quote'Char@123", false)]
    fn test_password_strength(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(
            is_strong_password(password),
            expected,
            "password: {:?}",
            password
        );
    }

    #[test]
    fn test_registration_rules_run_in_order() {
        // Presence is reported before email format
        assert_eq!(
            validate_registration("", "alice", "weak"),
            Err(ValidationError::MissingField)
        );
        // Email format is reported before password strength
        assert_eq!(
            validate_registration("not-an-email", "alice", "weak"),
            Err(ValidationError::InvalidEmailFormat)
        );
        assert_eq!(
            validate_registration("a@b.com", "alice", "weak"),
            Err(ValidationError::WeakPassword)
        );
        assert!(validate_registration("a@b.com", "alice", "Password@123").is_ok());
    }

    #[test]
    fn test_login_checks_presence_only() {
        assert_eq!(
            validate_login("", "Password@123"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate_login("a@b.com", ""),
            Err(ValidationError::MissingField)
        );
        // A weak password is fine at login time
        assert!(validate_login("a@b.com", "weak").is_ok());
        // So is a malformed email; correctness is judged by the directory
        assert!(validate_login("not-an-email", "whatever").is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Passwords shorter than the minimum never pass, whatever they contain.
        #[test]
        fn prop_short_passwords_rejected(password in "[A-Za-z0-9@$!%*?&#]{0,7}") {
            prop_assert!(!is_strong_password(&password));
        }

        /// Assembling one of each required class plus allowed filler always passes.
        #[test]
        fn prop_well_formed_passwords_accepted(
            lower in "[a-z]{1,4}",
            upper in "[A-Z]{1,4}",
            digit in "[0-9]{1,4}",
            special in "[@$!%*?&#]{1,4}",
            filler in "[A-Za-z0-9]{4,16}",
        ) {
            let password = format!("{lower}{upper}{digit}{special}{filler}");
            prop_assert!(is_strong_password(&password));
        }

        /// Validation is deterministic: same input, same outcome.
        #[test]
        fn prop_validation_is_deterministic(
            email in "[a-z@. ]{0,20}",
            username in "[a-z]{0,10}",
            password in "[A-Za-z0-9@$!%*?&# ]{0,20}",
        ) {
            let first = validate_registration(&email, &username, &password);
            let second = validate_registration(&email, &username, &password);
            prop_assert_eq!(first, second);
        }
    }
}

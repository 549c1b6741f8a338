//! Validation rules for the form fields
//!
//! Each field maps to exactly one rule through [`validate_one`]. The same
//! rules back both the inline per-field errors and the aggregate
//! [`validate_all`] check that gates submission.

use super::field::{FieldName, FieldValue, FormValues};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Message shown when the password does not satisfy the composition rule
pub const PASSWORD_PATTERN_WRONG: &str =
    "Must Contain 8 Characters, One Uppercase, One Lowercase, One Number and one special case Character";

/// Message shown when the terms checkbox is not ticked
pub const TERMS_INCORRECT: &str = "Terms must be accepted";

/// Characters accepted as the "special" class of a password
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*#?&";

/// Minimum password length
pub const PASSWORD_MIN_LEN: usize = 8;

/// Only letters, digits and the special set, at least eight of them
static PASSWORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "^[A-Za-z0-9{}]{{{},}}$",
        regex::escape(PASSWORD_SPECIAL_CHARS),
        PASSWORD_MIN_LEN
    );
    Regex::new(&pattern).expect("password shape pattern")
});

/// Character classes a password must contain at least once
static PASSWORD_REQUIRED_CLASSES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let special = format!("[{}]", regex::escape(PASSWORD_SPECIAL_CHARS));
    [
        Regex::new("[A-Za-z]").expect("letter pattern"),
        Regex::new("[0-9]").expect("digit pattern"),
        Regex::new(&special).expect("special pattern"),
    ]
});

/// A single field failed its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: FieldName,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: FieldName) -> Self {
        Self {
            field,
            message: message_for(field),
        }
    }
}

/// The fixed violation message configured for a field
pub fn message_for(field: FieldName) -> &'static str {
    match field {
        FieldName::Password => PASSWORD_PATTERN_WRONG,
        FieldName::Accept => TERMS_INCORRECT,
    }
}

/// Check whether a password satisfies the composition rule
pub fn password_is_valid(password: &str) -> bool {
    !password.is_empty()
        && PASSWORD_SHAPE.is_match(password)
        && PASSWORD_REQUIRED_CLASSES
            .iter()
            .all(|class| class.is_match(password))
}

/// Validate a single field value against that field's rule
///
/// A value of the wrong kind for the field fails with the field's message.
pub fn validate_one(field: FieldName, value: &FieldValue) -> Result<(), ValidationError> {
    let ok = match (field, value) {
        (FieldName::Password, FieldValue::Text(text)) => password_is_valid(text),
        (FieldName::Accept, FieldValue::Checked(checked)) => *checked,
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        debug!(field = field.as_str(), "field failed validation");
        Err(ValidationError::new(field))
    }
}

/// Validate the whole value set; true only when every field passes
pub fn validate_all(values: &FormValues) -> bool {
    FieldName::ALL
        .iter()
        .all(|&field| validate_one(field, &values.get(field)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_password(value: &str) -> Result<(), ValidationError> {
        validate_one(FieldName::Password, &FieldValue::Text(value.to_string()))
    }

    mod password {
        use super::*;

        #[test]
        fn test_valid_passwords_pass() {
            for pw in ["Abcdef1!", "abcdefg1@", "12345678a$", "ZZZZZZ9%", "a1!a1!a1!a1!", "Passw0rd&"] {
                assert!(check_password(pw).is_ok(), "{pw} should be valid");
            }
        }

        #[test]
        fn test_too_short_fails_with_composition_message() {
            let err = check_password("Ab1!xyz").unwrap_err();
            assert_eq!(err.field, FieldName::Password);
            assert_eq!(err.message, PASSWORD_PATTERN_WRONG);
        }

        #[test]
        fn test_empty_fails_with_composition_message() {
            let err = check_password("").unwrap_err();
            assert_eq!(err.message, PASSWORD_PATTERN_WRONG);
        }

        #[test]
        fn test_missing_digit_fails() {
            assert!(check_password("Abcdefg!").is_err());
        }

        #[test]
        fn test_missing_letter_fails() {
            assert!(check_password("1234567!").is_err());
        }

        #[test]
        fn test_missing_special_fails() {
            assert!(check_password("Abcdefg1").is_err());
        }

        #[test]
        fn test_characters_outside_allowed_set_fail() {
            assert!(check_password("Abcdef1! ").is_err());
            assert!(check_password("Abcdef1-!").is_err());
            assert!(check_password("Äbcdef1!").is_err());
        }

        #[test]
        fn test_non_ascii_digits_do_not_count() {
            // Arabic-Indic digit one
            assert!(check_password("Abcdefg!\u{0661}").is_err());
        }

        #[test]
        fn test_every_special_char_is_accepted() {
            for c in PASSWORD_SPECIAL_CHARS.chars() {
                let pw = format!("Abcdef1{c}");
                assert!(check_password(&pw).is_ok(), "{pw} should be valid");
            }
        }

        #[test]
        fn test_exactly_min_length_passes() {
            let pw = "Abcde1!x";
            assert_eq!(pw.len(), PASSWORD_MIN_LEN);
            assert!(check_password(pw).is_ok());
        }

        #[test]
        fn test_checkbox_value_for_password_fails() {
            let err = validate_one(FieldName::Password, &FieldValue::Checked(true)).unwrap_err();
            assert_eq!(err.message, PASSWORD_PATTERN_WRONG);
        }
    }

    mod accept {
        use super::*;

        #[test]
        fn test_unchecked_fails_with_terms_message() {
            let err = validate_one(FieldName::Accept, &FieldValue::Checked(false)).unwrap_err();
            assert_eq!(err.field, FieldName::Accept);
            assert_eq!(err.message, "Terms must be accepted");
        }

        #[test]
        fn test_checked_passes() {
            assert!(validate_one(FieldName::Accept, &FieldValue::Checked(true)).is_ok());
        }

        #[test]
        fn test_text_value_for_accept_fails() {
            let err =
                validate_one(FieldName::Accept, &FieldValue::Text("true".into())).unwrap_err();
            assert_eq!(err.message, TERMS_INCORRECT);
        }
    }

    mod aggregate {
        use super::*;

        #[test]
        fn test_all_valid() {
            assert!(validate_all(&FormValues::new("Abcdef1!", true)));
        }

        #[test]
        fn test_invalid_password_disables() {
            assert!(!validate_all(&FormValues::new("abc", true)));
        }

        #[test]
        fn test_unaccepted_terms_disable() {
            assert!(!validate_all(&FormValues::new("Abcdef1!", false)));
        }

        #[test]
        fn test_defaults_are_invalid() {
            assert!(!validate_all(&FormValues::default()));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::{select, Index};
        use proptest::test_runner::Config;

        const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        const DIGITS: &str = "0123456789";

        fn chars_of(sets: &[&str]) -> Vec<char> {
            sets.iter().flat_map(|set| set.chars()).collect()
        }

        fn allowed() -> Vec<char> {
            chars_of(&[LETTERS, DIGITS, PASSWORD_SPECIAL_CHARS])
        }

        /// One of each required class plus `filler` more allowed characters, shuffled
        fn with_required_classes(filler: std::ops::Range<usize>) -> impl Strategy<Value = String> {
            (
                select(chars_of(&[LETTERS])),
                select(chars_of(&[DIGITS])),
                select(chars_of(&[PASSWORD_SPECIAL_CHARS])),
                prop::collection::vec(select(allowed()), filler),
            )
                .prop_flat_map(|(letter, digit, special, mut rest)| {
                    rest.extend([letter, digit, special]);
                    Just(rest).prop_shuffle()
                })
                .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
        }

        fn valid_password() -> impl Strategy<Value = String> {
            with_required_classes(PASSWORD_MIN_LEN - 3..24)
        }

        fn too_short_password() -> impl Strategy<Value = String> {
            with_required_classes(0..PASSWORD_MIN_LEN - 3)
        }

        /// Allowed characters only, drawn from `sets`, long enough to pass the length rule
        fn drawn_from(sets: &[&str]) -> impl Strategy<Value = String> {
            prop::collection::vec(select(chars_of(sets)), PASSWORD_MIN_LEN..24)
                .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
        }

        /// A valid password with one character from outside the allowed set inserted
        fn with_foreign_char() -> impl Strategy<Value = String> {
            (
                valid_password(),
                any::<char>().prop_filter("outside the allowed set", |c| !allowed().contains(c)),
                any::<Index>(),
            )
                .prop_map(|(password, foreign, at)| {
                    let mut chars: Vec<char> = password.chars().collect();
                    chars.insert(at.index(chars.len() + 1), foreign);
                    chars.into_iter().collect::<String>()
                })
        }

        fn assert_rejected(password: &str) -> Result<(), TestCaseError> {
            let err = check_password(password).unwrap_err();
            prop_assert_eq!(err.field, FieldName::Password);
            prop_assert_eq!(err.message, PASSWORD_PATTERN_WRONG);
            Ok(())
        }

        proptest! {
            #![proptest_config(Config::with_cases(256))]

            #[test]
            fn valid_passwords_always_pass(password in valid_password()) {
                prop_assert!(check_password(&password).is_ok(), "{password:?} rejected");
            }

            #[test]
            fn short_passwords_fail(password in too_short_password()) {
                assert_rejected(&password)?;
            }

            #[test]
            fn passwords_without_digit_fail(
                password in drawn_from(&[LETTERS, PASSWORD_SPECIAL_CHARS])
            ) {
                assert_rejected(&password)?;
            }

            #[test]
            fn passwords_without_letter_fail(
                password in drawn_from(&[DIGITS, PASSWORD_SPECIAL_CHARS])
            ) {
                assert_rejected(&password)?;
            }

            #[test]
            fn passwords_without_special_fail(password in drawn_from(&[LETTERS, DIGITS])) {
                assert_rejected(&password)?;
            }

            #[test]
            fn passwords_with_foreign_chars_fail(password in with_foreign_char()) {
                assert_rejected(&password)?;
            }

            #[test]
            fn aggregate_matches_every_field_rule(
                password in prop_oneof![valid_password(), ".{0,16}"],
                accept in any::<bool>()
            ) {
                let values = FormValues::new(password, accept);
                let password_ok = check_password(&values.password).is_ok();
                let accept_ok =
                    validate_one(FieldName::Accept, &FieldValue::Checked(values.accept)).is_ok();
                prop_assert_eq!(validate_all(&values), password_ok && accept_ok);
            }
        }
    }

    #[test]
    fn test_error_display_includes_field() {
        let err = ValidationError::new(FieldName::Accept);
        assert_eq!(err.to_string(), "accept: Terms must be accepted");
    }
}

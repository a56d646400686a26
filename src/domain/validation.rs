//! Validation - Field Rules for the Profile Form
//!
//! `validate` is a pure function of a `FormState`; callers re-run it after
//! every mutation and read aggregate validity from the result.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::{PASSWORD_MIN_LEN, USERNAME_MIN_LEN};
use crate::domain::form::FormState;

/// Location of a field inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Username,
    Email,
    Password,
    /// Name of the hobby at the given position
    HobbyName(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Username => f.write_str("username"),
            FieldPath::Email => f.write_str("email"),
            FieldPath::Password => f.write_str("password"),
            FieldPath::HobbyName(index) => write!(f, "hobbies.{index}.name"),
        }
    }
}

/// Kind of rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Shorter than `min` characters
    MinLength { min: usize },
    /// Not a syntactically valid value (email)
    FormatError,
    /// Empty after trimming
    Required,
}

/// A failed rule attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    /// Translation key of the inline message
    pub fn message_key(&self) -> &'static str {
        match (self.path, self.kind) {
            (FieldPath::Username, _) => "error-username-min",
            (FieldPath::Email, _) => "error-email-format",
            (FieldPath::Password, _) => "error-password-min",
            (FieldPath::HobbyName(_), _) => "error-hobby-required",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::MinLength { min } => {
                write!(f, "{}: shorter than {min} characters", self.path)
            }
            ValidationErrorKind::FormatError => write!(f, "{}: invalid format", self.path),
            ValidationErrorKind::Required => write!(f, "{}: required", self.path),
        }
    }
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldPath, FieldError>,
}

impl ValidationResult {
    /// True when no field has an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for a field, if any
    pub fn error(&self, path: FieldPath) -> Option<&FieldError> {
        self.errors.get(&path)
    }

    /// All errors ordered by field path
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Number of failing fields
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn push(&mut self, path: FieldPath, kind: ValidationErrorKind) {
        self.errors.insert(path, FieldError { path, kind });
    }
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Whether `value` is a syntactically valid email address
pub fn is_valid_email(value: &str) -> bool {
    // The regex crate has no look-around; the leading-dot and double-dot rules are checked here.
    !value.starts_with('.') && !value.contains("..") && email_pattern().is_match(value)
}

/// Length in UTF-16 code units, so characters outside the BMP count twice
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate every present field of the form
pub fn validate(form: &FormState) -> ValidationResult {
    let mut result = ValidationResult::default();

    if text_len(&form.username) < USERNAME_MIN_LEN {
        result.push(
            FieldPath::Username,
            ValidationErrorKind::MinLength {
                min: USERNAME_MIN_LEN,
            },
        );
    }

    if !is_valid_email(&form.email) {
        result.push(FieldPath::Email, ValidationErrorKind::FormatError);
    }

    if text_len(&form.password) < PASSWORD_MIN_LEN {
        result.push(
            FieldPath::Password,
            ValidationErrorKind::MinLength {
                min: PASSWORD_MIN_LEN,
            },
        );
    }

    for (index, entry) in form.hobbies.iter().enumerate() {
        if entry.is_blank() {
            result.push(FieldPath::HobbyName(index), ValidationErrorKind::Required);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hobbies::{FirstEntryPolicy, HobbyList};

    fn valid_form() -> FormState {
        FormState {
            username: "ab".into(),
            email: "a@b.com".into(),
            password: "12345678".into(),
            hobbies: HobbyList::from_names(FirstEntryPolicy::Pinned, ["chess"]),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let result = validate(&valid_form());
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_username_length_boundary() {
        for (username, expect_error) in [("", true), ("a", true), ("ab", false), ("abc", false)] {
            let form = FormState {
                username: username.into(),
                ..valid_form()
            };
            let result = validate(&form);
            assert_eq!(
                result.error(FieldPath::Username).is_some(),
                expect_error,
                "username {username:?}"
            );
        }
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        let form = FormState {
            username: "山".into(),
            ..valid_form()
        };
        let error = validate(&form).error(FieldPath::Username).cloned();
        assert_eq!(
            error.map(|e| e.kind),
            Some(ValidationErrorKind::MinLength { min: 2 })
        );

        let form = FormState {
            username: "山田".into(),
            ..valid_form()
        };
        assert!(validate(&form).is_valid());
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        let form = FormState {
            username: "😀".into(),
            password: "😀😀😀😀".into(),
            ..valid_form()
        };
        assert!(validate(&form).is_valid());

        let form = FormState {
            password: "😀😀😀1".into(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form).error(FieldPath::Password).map(|e| e.kind),
            Some(ValidationErrorKind::MinLength { min: 8 })
        );
    }

    #[test]
    fn test_short_username_invalidates_regardless_of_other_fields() {
        let form = FormState {
            username: "a".into(),
            ..valid_form()
        };
        let result = validate(&form);
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.errors().next().map(|e| e.path), Some(FieldPath::Username));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for email in [
            "",
            "plain",
            "a@b",
            "a@b.c",
            "@b.com",
            "a@.com",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a@b..com",
            " a@b.com",
            "a@b.com ",
            "a b@c.com",
            "a@-b.com",
            "a@b.c0m",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
            let form = FormState {
                email: email.into(),
                ..valid_form()
            };
            assert_eq!(
                validate(&form).error(FieldPath::Email).map(|e| e.kind),
                Some(ValidationErrorKind::FormatError)
            );
        }
    }

    #[test]
    fn test_email_accepts_common_shapes() {
        for email in [
            "a@b.com",
            "first.last@example.co.jp",
            "user+tag@mail.example.org",
            "o'neil@example.com",
            "UPPER@EXAMPLE.COM",
            "x_y-z@sub-domain.example.io",
        ] {
            assert!(is_valid_email(email), "{email:?} should be accepted");
        }
    }

    #[test]
    fn test_password_length_boundary() {
        for (password, expect_error) in [("", true), ("1234567", true), ("12345678", false)] {
            let form = FormState {
                password: password.into(),
                ..valid_form()
            };
            assert_eq!(
                validate(&form).error(FieldPath::Password).is_some(),
                expect_error,
                "password {password:?}"
            );
        }
    }

    #[test]
    fn test_blank_hobbies_are_required() {
        let form = FormState {
            hobbies: HobbyList::from_names(FirstEntryPolicy::Pinned, ["chess", "  ", ""]),
            ..valid_form()
        };
        let result = validate(&form);
        assert!(!result.is_valid());
        assert!(result.error(FieldPath::HobbyName(0)).is_none());
        assert_eq!(
            result.error(FieldPath::HobbyName(1)).map(|e| e.kind),
            Some(ValidationErrorKind::Required)
        );
        assert!(result.error(FieldPath::HobbyName(2)).is_some());
    }

    #[test]
    fn test_filled_hobbies_do_not_affect_validity() {
        let hobbies = HobbyList::from_names(FirstEntryPolicy::Pinned, ["chess", "go", " tea "]);
        let form = FormState {
            hobbies: hobbies.clone(),
            ..valid_form()
        };
        assert!(validate(&form).is_valid());

        let form = FormState {
            password: "short".into(),
            hobbies,
            ..valid_form()
        };
        let result = validate(&form);
        assert_eq!(result.error_count(), 1);
        assert!(result.error(FieldPath::Password).is_some());
    }

    #[test]
    fn test_field_path_display() {
        assert_eq!(FieldPath::Username.to_string(), "username");
        assert_eq!(FieldPath::HobbyName(3).to_string(), "hobbies.3.name");
    }

    #[test]
    fn test_message_keys() {
        let error = FieldError {
            path: FieldPath::HobbyName(0),
            kind: ValidationErrorKind::Required,
        };
        assert_eq!(error.message_key(), "error-hobby-required");
    }
}

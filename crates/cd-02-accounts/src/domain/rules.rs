//! Registration rules.
//!
//! | Field | Rule |
//! |-------|------|
//! | `first_name`, `last_name` | 1..=50 characters after trimming |
//! | `username` | 3..=50 of `[A-Za-z0-9_-]` |
//! | `email` | `local@domain.tld`, at most 254 characters, stored lowercased |
//! | `password` | 8..=128 characters with an upper, a lower and a digit |

use super::entities::Registration;
use super::errors::AccountError;

pub const MAX_NAME_LEN: usize = 50;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// A registration that passed every rule, with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> AccountError {
    AccountError::InvalidField {
        field,
        reason: reason.into(),
    }
}

/// Checks every field in declaration order, failing on the first violation.
pub fn check_registration(reg: Registration) -> Result<CheckedRegistration, AccountError> {
    let first_name = check_name("first_name", &reg.first_name)?;
    let last_name = check_name("last_name", &reg.last_name)?;
    let email = check_email(&reg.email)?;
    let username = check_username(&reg.username)?;
    check_password(&reg.password)?;

    Ok(CheckedRegistration {
        first_name,
        last_name,
        email,
        username,
        password: reg.password,
    })
}

fn check_name(field: &'static str, value: &str) -> Result<String, AccountError> {
    let value = value.trim();
    let len = value.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(invalid(
            field,
            format!("must be between 1 and {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(value.to_string())
}

fn check_username(value: &str) -> Result<String, AccountError> {
    let len = value.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(invalid(
            "username",
            format!("must be between {MIN_USERNAME_LEN} and {MAX_USERNAME_LEN} characters"),
        ));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(invalid(
            "username",
            "may contain only letters, digits, '_' and '-'",
        ));
    }
    Ok(value.to_string())
}

fn check_email(value: &str) -> Result<String, AccountError> {
    let value = value.trim().to_ascii_lowercase();
    let malformed = || invalid("email", "is not a valid email address");

    if value.len() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
        return Err(malformed());
    }
    let (local, domain) = value.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.contains('@') {
        return Err(malformed());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(malformed());
    }
    Ok(value)
}

fn check_password(value: &str) -> Result<(), AccountError> {
    let len = value.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(invalid(
            "password",
            format!("must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"),
        ));
    }
    let has_upper = value.chars().any(|c| c.is_uppercase());
    let has_lower = value.chars().any(|c| c.is_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_upper && has_lower && has_digit) {
        return Err(invalid(
            "password",
            "must contain an uppercase letter, a lowercase letter and a digit",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            first_name: " Test ".into(),
            last_name: "User".into(),
            email: "TestUser@Example.com".into(),
            username: "testuser".into(),
            password: "Password1".into(),
        }
    }

    fn field_of(err: AccountError) -> &'static str {
        match err {
            AccountError::InvalidField { field, .. } => field,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_valid_registration_is_normalized() {
        let checked = check_registration(registration()).unwrap();
        assert_eq!(checked.first_name, "Test");
        assert_eq!(checked.email, "testuser@example.com");
        assert_eq!(checked.username, "testuser");
    }

    #[test]
    fn test_blank_name() {
        let reg = Registration {
            last_name: "   ".into(),
            ..registration()
        };
        assert_eq!(field_of(check_registration(reg).unwrap_err()), "last_name");
    }

    #[test]
    fn test_bad_emails() {
        for email in ["plain", "@example.com", "a@b", "a@@b.com", "a@.com", "a b@c.com"] {
            let reg = Registration {
                email: email.into(),
                ..registration()
            };
            assert_eq!(field_of(check_registration(reg).unwrap_err()), "email", "{email}");
        }
    }

    #[test]
    fn test_bad_usernames() {
        for username in ["ab", "has space", "semi;colon"] {
            let reg = Registration {
                username: username.into(),
                ..registration()
            };
            assert_eq!(
                field_of(check_registration(reg).unwrap_err()),
                "username",
                "{username}"
            );
        }
    }

    #[test]
    fn test_weak_passwords() {
        for password in ["Short1", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            let reg = Registration {
                password: password.into(),
                ..registration()
            };
            assert_eq!(
                field_of(check_registration(reg).unwrap_err()),
                "password",
                "{password}"
            );
        }
    }
}

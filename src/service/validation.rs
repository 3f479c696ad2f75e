//! Request field validation.

use regex::Regex;

use crate::error::AppError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 5;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Lower-case normalization applied to every stored email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|_| AppError::Internal("invalid email pattern".into()))?;
    if !re.is_match(email.trim()) {
        return Err(AppError::Validation("email must be a valid email address".into()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lower_cases_and_trims() {
        assert_eq!(normalize_email(" Test@RAINWALK.io "), "test@rainwalk.io");
    }

    #[test]
    fn well_formed_emails_pass() {
        assert!(validate_email("test@x.io").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn missing_or_malformed_emails_fail() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("one").is_err());
        assert!(validate_email("no-at.example.com").is_err());
        assert!(validate_email("two@@x.io").is_err());
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_password("pw").is_err());
        assert!(validate_password("1234").is_err());
        assert!(validate_password("12345").is_ok());
        assert!(validate_password("testpass").is_ok());
    }
}

use std::fmt;

use validator::Validate;

/// Input for creating an administrator account.
#[derive(Clone, Validate)]
pub struct CreateAdminDto {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

impl CreateAdminDto {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CreateAdminDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAdminDto")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::errors::AppError;

    #[test]
    fn test_short_password_rejected() {
        let dto = CreateAdminDto::new("admin@example.com", "12345");
        let err = AppError::from(dto.validate().unwrap_err());
        assert_eq!(
            err.to_string(),
            "Validation: password: password must be at least 6 characters"
        );
    }

    #[test]
    fn test_bad_email_and_password_both_reported() {
        let dto = CreateAdminDto::new("not-an-email", "");
        let err = AppError::from(dto.validate().unwrap_err());
        assert_eq!(
            err.to_string(),
            "Validation: email: invalid email format; password: password must be at least 6 characters"
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let dto = CreateAdminDto::new("admin@example.com", "temp123");
        assert!(dto.validate().is_ok());
        assert!(!format!("{:?}", dto).contains("temp123"));
    }
}

use validator::ValidateEmail;

use crate::domain::error::AppResult;
use crate::domain::services::email_validator::EmailValidator;

/// Delegates to the `validator` crate's HTML5-style email check. The input
/// is checked exactly as received.
#[derive(Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}

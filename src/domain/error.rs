use thiserror::Error;

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

/// Faults raised by the collaborators behind the signup controller.
///
/// None of these ever reach a response body; the controller collapses
/// every variant into a generic server error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Encrypter failure: {0}")]
    Encrypter(String),
    #[error("Email validator failure: {0}")]
    EmailValidator(String),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AppError::Encrypter(error.to_string())
    }
}

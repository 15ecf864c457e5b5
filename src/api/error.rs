use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

pub type ApiResult<T> = core::result::Result<T, ApiError>;

pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Every failure a caller of the signup endpoint can observe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
    #[error("Internal server error")]
    ServerError,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => BAD_REQUEST,
            Self::ServerError => INTERNAL_SERVER_ERROR,
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiError", 1)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ApiError::MissingParam("name"), "Missing param: name", 400)]
    #[case(ApiError::InvalidParam("email"), "Invalid param: email", 400)]
    #[case(ApiError::ServerError, "Internal server error", 500)]
    fn test_rendering(#[case] error: ApiError, #[case] message: &str, #[case] code: u16) {
        assert_eq!(error.to_string(), message);
        assert_eq!(error.status_code(), code);
        assert_eq!(serde_json::to_value(&error).unwrap(), json!({ "message": message }));
    }
}

use crate::domain::error::AppResult;

pub trait EmailValidator: 'static + Sync + Send {
    /// `Ok(false)` means a malformed address. `Err` is reserved for faults
    /// inside the checker itself.
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

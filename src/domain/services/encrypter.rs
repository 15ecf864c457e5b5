use crate::domain::error::AppResult;

pub trait Encrypter: 'static + Sync + Send {
    fn encrypt(&self, value: &str) -> AppResult<String>;
}

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::domain::error::AppResult;
use crate::domain::services::encrypter::Encrypter;

/// Hashes with Argon2id default parameters and a random salt, producing a
/// PHC-formatted string.
#[derive(Default)]
pub struct Argon2Encrypter;

impl Encrypter for Argon2Encrypter {
    fn encrypt(&self, value: &str) -> AppResult<String> {
        let argon2 = Argon2::default();
        let salt = SaltString::generate(&mut OsRng);

        Ok(argon2
            .hash_password(value.as_bytes(), &salt)
            .map(|hash| hash.to_string())?)
    }
}

use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, CreateAccount},
    repositories::account::AccountRepository,
    services::{account::AddAccount, encrypter::Encrypter},
};

use async_trait::async_trait;

/// Account creation backed by a repository; the password is stored hashed.
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, mut new_account: CreateAccount) -> AppResult<Account> {
        new_account.password = self.encrypter.encrypt(&new_account.password)?;

        let account = self.repository.add(new_account).await?;

        tracing::debug!(account_id = %account.id, "account created");

        Ok(account)
    }
}

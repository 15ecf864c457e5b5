use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores the account and returns it with a freshly assigned id.
    async fn add(&self, new_account: CreateAccount) -> RepositoryResult<Account>;
}

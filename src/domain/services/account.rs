use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, CreateAccount};

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, new_account: CreateAccount) -> AppResult<Account>;
}

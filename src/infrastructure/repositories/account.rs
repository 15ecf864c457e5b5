use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn add(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(new_account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNT))
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;
    use uuid::Uuid;

    use super::*;

    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn add(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
            let mut accounts = self.accounts.lock().await;

            let account = Account {
                id: Uuid::new_v4().to_string(),
                name: new_account.name,
                email: new_account.email,
                password: new_account.password,
            };

            accounts.push(account.clone());

            Ok(account)
        }
    }
}

#[cfg(test)]
mod tests {
    use testcontainers::ImageExt;
    use testcontainers_modules::{
        surrealdb::{SURREALDB_PORT, SurrealDb},
        testcontainers::runners::AsyncRunner,
    };

    use super::*;
    use crate::config::AppConfig;
    use crate::infrastructure::databases::surrealdb;

    #[tokio::test]
    #[ignore = "requires a docker daemon"]
    async fn test_add_persists_account() {
        let db_container = SurrealDb::default()
            .with_tag("v2.2.1")
            .start()
            .await
            .unwrap();

        let mut config = AppConfig::default();
        config.surrealdb.host = "127.0.0.1".to_string();
        config.surrealdb.port = db_container
            .get_host_port_ipv4(SURREALDB_PORT)
            .await
            .unwrap();

        let conn = surrealdb::connect(&config.surrealdb).await.unwrap();
        let repository = AccountRepositoryImpl::new(Arc::new(conn));

        let new_account = CreateAccount {
            name: "New Account".to_string(),
            email: "new_account@email.com".to_string(),
            password: "hashed".to_string(),
        };

        let first = repository.add(new_account.clone()).await.unwrap();
        let second = repository.add(new_account).await.unwrap();

        assert!(!first.id.is_empty());
        assert!(!first.id.starts_with("account:"));
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "New Account");
        assert_eq!(first.email, "new_account@email.com");
        assert_eq!(first.password, "hashed");

        let _ = db_container.stop().await;
    }
}

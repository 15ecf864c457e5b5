use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::api::controllers::signup::SignUpController;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;
use crate::domain::services::encrypter::Encrypter;

use crate::services::account::DbAddAccount;

use crate::infrastructure::cryptography::argon2::Argon2Encrypter;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::validators::email::EmailValidatorAdapter;

pub struct Container {
    pub signup_controller: Arc<SignUpController>,
}

impl Container {
    pub fn new(conn: Surreal<Client>) -> Self {
        let db = Arc::new(conn);

        Container {
            signup_controller: signup_controller(add_account(db)),
        }
    }
}

fn add_account(db: Arc<Surreal<Client>>) -> Arc<dyn AddAccount> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));
    let encrypter: Arc<dyn Encrypter> = Arc::new(Argon2Encrypter);

    Arc::new(DbAddAccount::new(encrypter, account_repository))
}

fn signup_controller(add_account: Arc<dyn AddAccount>) -> Arc<SignUpController> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter);

    Arc::new(SignUpController::new(email_validator, add_account))
}

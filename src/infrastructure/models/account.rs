use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::account::{Account, CreateAccount};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    name: String,
    email: String,
    password: String,
}

impl From<CreateAccount> for SurrealAccountCreate {
    fn from(new_account: CreateAccount) -> Self {
        SurrealAccountCreate {
            name: new_account.name,
            email: new_account.email,
            password: new_account.password,
        }
    }
}

// Only the record key is exposed, without the table prefix.
impl From<SurrealAccount> for Account {
    fn from(record: SurrealAccount) -> Self {
        Account {
            id: record.id.id.to_raw(),
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

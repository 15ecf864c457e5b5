use std::sync::Arc;

use async_trait::async_trait;

use crate::api::controller::Controller;
use crate::api::dto::signup::SignupRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::http::{HttpRequest, HttpResponse, bad_request, ok, server_error};
use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::services::account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn signup(&self, request: SignupRequest) -> ApiResult<Account> {
        let new_account = validate(request)?;

        let is_valid = self
            .email_validator
            .is_valid(&new_account.email)
            .map_err(|err| {
                tracing::error!(error = %err, "email validator failed");
                ApiError::ServerError
            })?;

        if !is_valid {
            return Err(ApiError::InvalidParam("email"));
        }

        self.add_account.add(new_account).await.map_err(|err| {
            tracing::error!(error = %err, "account creation failed");
            ApiError::ServerError
        })
    }
}

#[async_trait]
impl Controller<SignupRequest> for SignUpController {
    async fn handle(&self, request: HttpRequest<SignupRequest>) -> HttpResponse {
        match self.signup(request.body).await {
            Ok(account) => ok(&account),
            Err(ApiError::ServerError) => server_error(),
            Err(error) => {
                tracing::debug!(%error, "signup rejected");
                bad_request(error)
            }
        }
    }
}

// Field checks run in declaration order and stop at the first failure.
fn validate(request: SignupRequest) -> ApiResult<CreateAccount> {
    let name = required(request.name, "name")?;
    let email = required(request.email, "email")?;
    let password = required(request.password, "password")?;
    let password_confirmation = required(request.password_confirmation, "passwordConfirmation")?;

    if password != password_confirmation {
        return Err(ApiError::InvalidParam("passwordConfirmation"));
    }

    Ok(CreateAccount {
        name,
        email,
        password,
    })
}

fn required(value: Option<String>, field: &'static str) -> ApiResult<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingParam(field))
}

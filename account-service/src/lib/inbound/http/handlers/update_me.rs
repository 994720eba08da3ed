use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::errors::UsernameError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::EmailAddress;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::Username;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Partially update the caller's own account. The target account comes from
/// the verified identity, never from the request body.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<ApiSuccess<UpdateMeResponseData>, ApiError> {
    let account_id = AccountId::from_string(identity.id())
        .map_err(|_| ApiError::Unauthorized("Invalid token format".to_string()))?;

    state
        .account_service
        .update_account(&account_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMeRequest {
    username: Option<String>,
    email_address: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateMeRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateMeRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, ParseUpdateMeRequestError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email_address.map(EmailAddress::new).transpose()?;
        Ok(UpdateAccountCommand {
            username,
            email,
            password: self.password,
        })
    }
}

impl From<ParseUpdateMeRequestError> for ApiError {
    fn from(err: ParseUpdateMeRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateMeResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for UpdateMeResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.to_string(),
            created_at: account.created_at,
        }
    }
}

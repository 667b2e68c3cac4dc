use contracts::domain::common::ApiMessage;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::auth;
use contracts::system::auth::{AuthUser, LoginRequest, LoginResponse};

use crate::shared::api_utils::ApiClient;

/// Exchange credentials for a token. Sent without a bearer.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    ApiClient::new(None).post_json(auth::LOGIN, &request).await
}

pub async fn logout(client: &ApiClient) -> Result<ApiMessage, ApiError> {
    client.post_json(auth::LOGOUT, &serde_json::json!({})).await
}

/// Profile of the token holder
pub async fn me(client: &ApiClient) -> Result<AuthUser, ApiError> {
    client.get(auth::ME).await
}

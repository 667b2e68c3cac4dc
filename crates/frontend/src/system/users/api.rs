use contracts::domain::common::ApiMessage;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::user;
use contracts::system::users::{User, UserForm, UserIdQuery, UserListResponse, UserResponse};

use crate::shared::api_utils::{with_segment, ApiClient};

pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    let response: UserListResponse = client.get(user::LIST).await?;
    Ok(response.users)
}

pub async fn create_user(client: &ApiClient, form: &UserForm) -> Result<UserResponse, ApiError> {
    client.post_json(user::CREATE, form).await
}

pub async fn update_user(
    client: &ApiClient,
    user_id: &str,
    form: &UserForm,
) -> Result<UserResponse, ApiError> {
    client
        .put_json_with_query(user::UPDATE, &UserIdQuery { user_id }, form)
        .await
}

pub async fn delete_user(client: &ApiClient, user_id: &str) -> Result<ApiMessage, ApiError> {
    client.delete(with_segment(user::DELETE, user_id)).await
}

use contracts::domain::category::aggregate::{
    Category, CategoryForm, CategoryIdQuery, CategoryListResponse,
};
use contracts::domain::common::ApiMessage;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::category;
use web_sys::File;

use crate::shared::api_utils::{multipart, with_query, ApiClient};

const LOGO_FIELD: &str = "category_logo";

pub async fn fetch_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let response: CategoryListResponse = client.get(category::LIST).await?;
    Ok(response.categories)
}

pub async fn create_category(
    client: &ApiClient,
    form: &CategoryForm,
    logo: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&form.fields(), &[(LOGO_FIELD, logo)])?;
    client.post_multipart(category::CREATE.to_string(), body).await
}

pub async fn update_category(
    client: &ApiClient,
    category_id: &str,
    form: &CategoryForm,
    logo: Option<File>,
) -> Result<ApiMessage, ApiError> {
    let files: Vec<(&str, File)> = logo.into_iter().map(|f| (LOGO_FIELD, f)).collect();
    let body = multipart(&form.fields(), &files)?;
    let url = with_query(category::UPDATE, &CategoryIdQuery { category_id })?;
    client.put_multipart(url, body).await
}

pub async fn delete_category(client: &ApiClient, category_id: &str) -> Result<ApiMessage, ApiError> {
    let url = with_query(category::DELETE, &CategoryIdQuery { category_id })?;
    client.delete(url).await
}

use contracts::domain::common::ApiMessage;
use contracts::domain::subcategory::aggregate::{
    CreateSubCategoryQuery, SubCategory, SubCategoryForm, SubCategoryIdQuery,
    SubCategoryListResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::subcategory;
use web_sys::File;

use crate::shared::api_utils::{multipart, with_query, ApiClient};

const LOGO_FIELD: &str = "sub_category_logo";

pub async fn fetch_subcategories(client: &ApiClient) -> Result<Vec<SubCategory>, ApiError> {
    let response: SubCategoryListResponse = client.get(subcategory::LIST).await?;
    Ok(response.data)
}

/// The parent category travels in the query string, not the form
pub async fn create_subcategory(
    client: &ApiClient,
    form: &SubCategoryForm,
    logo: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&form.fields(), &[(LOGO_FIELD, logo)])?;
    let url = with_query(
        subcategory::CREATE,
        &CreateSubCategoryQuery {
            category_id: &form.category_id,
        },
    )?;
    client.post_multipart(url, body).await
}

pub async fn update_subcategory(
    client: &ApiClient,
    subcategory_id: &str,
    form: &SubCategoryForm,
    logo: Option<File>,
) -> Result<ApiMessage, ApiError> {
    let files: Vec<(&str, File)> = logo.into_iter().map(|f| (LOGO_FIELD, f)).collect();
    let body = multipart(&form.fields(), &files)?;
    let url = with_query(subcategory::UPDATE, &SubCategoryIdQuery { subcategory_id })?;
    client.put_multipart(url, body).await
}

use contracts::domain::brand::aggregate::{Brand, BrandForm, BrandIdQuery, BrandListResponse};
use contracts::domain::common::ApiMessage;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::brand;
use web_sys::File;

use crate::shared::api_utils::{multipart, with_query, ApiClient};

const LOGO_FIELD: &str = "brand_logo";

pub async fn fetch_brands(client: &ApiClient) -> Result<Vec<Brand>, ApiError> {
    let response: BrandListResponse = client.get(brand::LIST).await?;
    Ok(response.data)
}

pub async fn create_brand(
    client: &ApiClient,
    form: &BrandForm,
    logo: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&form.fields(), &[(LOGO_FIELD, logo)])?;
    client.post_multipart(brand::CREATE.to_string(), body).await
}

/// Without a new logo the stored one is kept
pub async fn update_brand(
    client: &ApiClient,
    brand_id: &str,
    form: &BrandForm,
    logo: Option<File>,
) -> Result<ApiMessage, ApiError> {
    let files: Vec<(&str, File)> = logo.into_iter().map(|f| (LOGO_FIELD, f)).collect();
    let body = multipart(&form.fields(), &files)?;
    let url = with_query(brand::UPDATE, &BrandIdQuery { brand_id })?;
    client.put_multipart(url, body).await
}

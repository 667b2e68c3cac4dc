use contracts::domain::product::aggregate::{
    AddDimensionRequest, AddDimensionResponse, Dimension, DimensionListResponse, Product,
    ProductForm, ProductIdQuery, ProductListResponse, ProductResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::{metrics, product};
use web_sys::File;

use crate::shared::api_utils::{multipart, with_query, ApiClient};

const AVATAR_FIELD: &str = "avatar";
const COVER_FIELD: &str = "cover_images";

pub async fn fetch_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    let response: ProductListResponse = client.get(product::LIST).await?;
    Ok(response.products)
}

/// Without an avatar the stored one is kept; covers are appended
fn product_body(
    form: &ProductForm,
    avatar: Option<File>,
    covers: Vec<File>,
) -> Result<web_sys::FormData, ApiError> {
    let mut files: Vec<(&str, File)> = avatar.into_iter().map(|f| (AVATAR_FIELD, f)).collect();
    files.extend(covers.into_iter().map(|f| (COVER_FIELD, f)));
    multipart(&form.fields(), &files)
}

pub async fn create_product(
    client: &ApiClient,
    form: &ProductForm,
    avatar: File,
    covers: Vec<File>,
) -> Result<ProductResponse, ApiError> {
    let body = product_body(form, Some(avatar), covers)?;
    let url = with_query(product::CREATE, &form.create_query())?;
    client.post_multipart(url, body).await
}

pub async fn update_product(
    client: &ApiClient,
    product_id: &str,
    form: &ProductForm,
    avatar: Option<File>,
    covers: Vec<File>,
) -> Result<ProductResponse, ApiError> {
    let body = product_body(form, avatar, covers)?;
    let url = with_query(product::UPDATE, &ProductIdQuery { product_id })?;
    client.put_multipart(url, body).await
}

pub async fn fetch_dimensions(client: &ApiClient) -> Result<Vec<Dimension>, ApiError> {
    let response: DimensionListResponse = client.get(metrics::LIST).await?;
    Ok(response.metrics)
}

pub async fn add_dimension(client: &ApiClient, name: &str) -> Result<AddDimensionResponse, ApiError> {
    client
        .post_json(
            metrics::ADD,
            &AddDimensionRequest {
                dimension_name: name.trim().to_string(),
            },
        )
        .await
}

use contracts::domain::common::ApiMessage;
use contracts::domain::promotion::aggregate::{
    Association, BannerIdQuery, BannerItem, CarouselForm, CarouselIdQuery, CarouselItem,
    CountdownForm, CountdownItem, PromotionListResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::{banner, carousel, countdown};
use web_sys::File;

use crate::shared::api_utils::{multipart, with_query, ApiClient};

const CAROUSEL_IMAGE: &str = "carousel_img";
const BANNER_IMAGE: &str = "banner_img";
const COUNTDOWN_IMAGE: &str = "countdown_img";

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

pub async fn fetch_carousel(client: &ApiClient) -> Result<Vec<CarouselItem>, ApiError> {
    let response: PromotionListResponse<CarouselItem> = client.get(carousel::LIST).await?;
    Ok(response.data)
}

pub async fn create_carousel(
    client: &ApiClient,
    form: &CarouselForm,
    image: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&form.fields(None), &[(CAROUSEL_IMAGE, image)])?;
    client.post_multipart(carousel::CREATE.to_string(), body).await
}

/// The id travels in the form body, not the query
pub async fn update_carousel(
    client: &ApiClient,
    carousel_id: &str,
    form: &CarouselForm,
    image: Option<File>,
) -> Result<ApiMessage, ApiError> {
    let files: Vec<(&str, File)> = image.into_iter().map(|f| (CAROUSEL_IMAGE, f)).collect();
    let body = multipart(&form.fields(Some(carousel_id)), &files)?;
    client.put_multipart(carousel::UPDATE.to_string(), body).await
}

pub async fn delete_carousel(client: &ApiClient, carousel_id: &str) -> Result<ApiMessage, ApiError> {
    let url = with_query(carousel::DELETE, &CarouselIdQuery { carousel_id })?;
    client.delete(url).await
}

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

pub async fn fetch_banners(client: &ApiClient) -> Result<Vec<BannerItem>, ApiError> {
    let response: PromotionListResponse<BannerItem> = client.get(banner::LIST).await?;
    Ok(response.data)
}

pub async fn create_banner(
    client: &ApiClient,
    association: &Association,
    image: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&association.fields(), &[(BANNER_IMAGE, image)])?;
    client.post_multipart(banner::CREATE.to_string(), body).await
}

pub async fn delete_banner(client: &ApiClient, banner_id: &str) -> Result<ApiMessage, ApiError> {
    let url = with_query(banner::DELETE, &BannerIdQuery { banner_id })?;
    client.delete(url).await
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

pub async fn fetch_countdowns(client: &ApiClient) -> Result<Vec<CountdownItem>, ApiError> {
    let response: PromotionListResponse<CountdownItem> = client.get(countdown::LIST).await?;
    Ok(response.data)
}

pub async fn create_countdown(
    client: &ApiClient,
    form: &CountdownForm,
    image: File,
) -> Result<ApiMessage, ApiError> {
    let body = multipart(&form.fields(), &[(COUNTDOWN_IMAGE, image)])?;
    client.post_multipart(countdown::CREATE.to_string(), body).await
}

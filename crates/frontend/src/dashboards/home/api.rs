use contracts::dashboards::summary::dto::{DashboardData, DashboardResponse};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::dashboard;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_summary(client: &ApiClient) -> Result<DashboardData, ApiError> {
    let response: DashboardResponse = client.get(dashboard::DATA).await?;
    Ok(response.data)
}

use contracts::domain::order::aggregate::{
    find_order, Order, OrderListParams, OrderListResponse, OrderStatusUpdate,
    StatusUpdateResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::order;

use crate::shared::api_utils::ApiClient;
use crate::shared::config::config;

pub async fn fetch_orders(
    client: &ApiClient,
    params: OrderListParams,
) -> Result<OrderListResponse, ApiError> {
    client.get_with_query(order::LIST, &params).await
}

/// There is no detail endpoint: the order is looked up in the first batch
pub async fn fetch_order(client: &ApiClient, id: &str) -> Result<Order, ApiError> {
    let params = OrderListParams::new(1, config().order_detail_batch);
    let response = fetch_orders(client, params).await?;
    find_order(&response.orders, id)
        .cloned()
        .ok_or_else(|| ApiError::Missing("Order not found".into()))
}

pub async fn update_status(
    client: &ApiClient,
    update: &OrderStatusUpdate,
) -> Result<StatusUpdateResponse, ApiError> {
    client
        .post_json_with_query(order::CONFIRM_ORDER, &update.query(), &update.body())
        .await
}

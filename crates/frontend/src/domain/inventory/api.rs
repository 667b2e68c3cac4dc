use contracts::domain::inventory::aggregate::{
    AddBillRequest, AddBillResponse, AddSupplierRequest, AddSupplierResponse, BillDetail,
    BillDetailResponse, BillIdQuery, InventoryBillListResponse, InventoryItem,
    InventoryListResponse, PageParams, Supplier, SupplierListResponse,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints::{inventory, supplier};

use crate::shared::api_utils::ApiClient;

/// Rows fetched to fill the product picker of the bill editor
const PICKER_LIMIT: usize = 100;

pub async fn fetch_inventory(
    client: &ApiClient,
    params: PageParams,
) -> Result<InventoryListResponse, ApiError> {
    client.get_with_query(inventory::LIST, &params).await
}

pub async fn fetch_inventory_options(client: &ApiClient) -> Result<Vec<InventoryItem>, ApiError> {
    let params = PageParams {
        page: 1,
        limit: PICKER_LIMIT,
    };
    Ok(fetch_inventory(client, params).await?.data)
}

pub async fn fetch_bills(
    client: &ApiClient,
    params: PageParams,
) -> Result<InventoryBillListResponse, ApiError> {
    client.get_with_query(inventory::BILL_LIST, &params).await
}

pub async fn fetch_bill(client: &ApiClient, id: &str) -> Result<BillDetail, ApiError> {
    let response: BillDetailResponse = client
        .get_with_query(inventory::BILL_BY_ID, &BillIdQuery { id })
        .await?;
    Ok(response.data)
}

pub async fn add_bill(client: &ApiClient, request: &AddBillRequest) -> Result<AddBillResponse, ApiError> {
    client.post_json(inventory::ADD_BILL, request).await
}

pub async fn fetch_suppliers(client: &ApiClient) -> Result<Vec<Supplier>, ApiError> {
    let response: SupplierListResponse = client.get(supplier::LIST).await?;
    Ok(response.suppliers)
}

pub async fn add_supplier(
    client: &ApiClient,
    request: &AddSupplierRequest,
) -> Result<AddSupplierResponse, ApiError> {
    client.post_json(supplier::CREATE, request).await
}
